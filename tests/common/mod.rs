#![allow(dead_code)]

use chrono::NaiveDate;
use company_formation_server::documents::{
    BylawsGenerator, CompanyFormationRequest, FormationGenerator, TemplateRegistry,
};
use company_formation_server::{AppConfig, AppState};
use serde_json::{json, Value};

/// Fixed render date so day/month text is predictable.
pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

pub fn formation_generator() -> FormationGenerator {
    FormationGenerator::new(TemplateRegistry::builtin()).with_issue_date(issue_date())
}

pub fn bylaws_generator() -> BylawsGenerator {
    BylawsGenerator::new(TemplateRegistry::builtin()).with_issue_date(issue_date())
}

pub fn test_app_state() -> AppState {
    AppState::new(AppConfig::default()).with_generators(formation_generator(), bylaws_generator())
}

pub fn formation_request(
    company_name: &str,
    state: &str,
    company_type: &str,
    incorporator: &str,
) -> CompanyFormationRequest {
    CompanyFormationRequest {
        company_name: Some(company_name.to_string()),
        state_of_formation: Some(state.to_string()),
        company_type: Some(company_type.to_string()),
        incorporator_name: Some(incorporator.to_string()),
    }
}

pub fn bylaws_body() -> Value {
    json!({
        "company_name": "Test Corporation",
        "principal_office": "123 Main St, Suite 100, San Francisco, CA 94105",
        "fiscal_year_end": "12-31",
        "board_size": 5,
        "officer_titles": ["Chief Executive Officer", "Secretary", "Treasurer"],
        "annual_meeting_month": "June",
        "quorum_percentage": 51
    })
}
