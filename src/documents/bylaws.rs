//! Generator for corporate bylaws.
//!
//! Bylaws are the same for every jurisdiction. The officer list has no upper
//! bound, so Article V is positioned relative to the last officer line.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::common::bylaws_filename;
use super::engine::{PdfRenderEngine, RenderContext};
use super::registry::TemplateRegistry;
use super::traits::{FieldSource, Generator, Validator};
use super::validation::{
    validate_company_name, validate_fiscal_year_end, validate_integer, validate_month_name,
    validate_required, validate_string_list, ValidationErrors,
};
use super::{GeneratedDocument, GeneratorError};

/// Raw bylaws request. Numeric and list fields stay untyped until validation
/// so that a wrong type is reported against the field that carries it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BylawsRequest {
    #[serde(default)]
    #[schema(example = "Test Corporation")]
    pub company_name: Option<String>,
    #[serde(default)]
    #[schema(example = "123 Main St, Suite 100, San Francisco, CA 94105")]
    pub principal_office: Option<String>,
    /// MM-DD
    #[serde(default)]
    #[schema(example = "12-31")]
    pub fiscal_year_end: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 5)]
    pub board_size: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub officer_titles: Option<Value>,
    #[serde(default)]
    #[schema(example = "June")]
    pub annual_meeting_month: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 51)]
    pub quorum_percentage: Option<Value>,
}

/// Validated bylaws data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BylawsRecord {
    company_name: String,
    principal_office: String,
    fiscal_year_end: String,
    board_size: u32,
    officer_titles: Vec<String>,
    annual_meeting_month: String,
    quorum_percentage: u8,
}

impl BylawsRecord {
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn principal_office(&self) -> &str {
        &self.principal_office
    }

    pub fn fiscal_year_end(&self) -> &str {
        &self.fiscal_year_end
    }

    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    pub fn officer_titles(&self) -> &[String] {
        &self.officer_titles
    }

    pub fn annual_meeting_month(&self) -> &str {
        &self.annual_meeting_month
    }

    pub fn quorum_percentage(&self) -> u8 {
        self.quorum_percentage
    }
}

impl Validator for BylawsRequest {
    type Record = BylawsRecord;

    fn validate(&self) -> Result<BylawsRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let company_name =
            validate_company_name(self.company_name.as_deref(), "company_name", &mut errors);
        let principal_office = validate_required(
            self.principal_office.as_deref(),
            "principal_office",
            "Principal office",
            &mut errors,
        );
        let fiscal_year_end = validate_fiscal_year_end(
            self.fiscal_year_end.as_deref(),
            "fiscal_year_end",
            &mut errors,
        );
        let board_size = validate_integer(
            self.board_size.as_ref(),
            "board_size",
            "Board size",
            1,
            Some(i64::from(u32::MAX)),
            &mut errors,
        );
        let officer_titles = validate_string_list(
            self.officer_titles.as_ref(),
            "officer_titles",
            "Officer titles",
            &mut errors,
        );
        let annual_meeting_month = validate_month_name(
            self.annual_meeting_month.as_deref(),
            "annual_meeting_month",
            &mut errors,
        );
        let quorum_percentage = validate_integer(
            self.quorum_percentage.as_ref(),
            "quorum_percentage",
            "Quorum percentage",
            0,
            Some(100),
            &mut errors,
        );

        match (
            company_name,
            principal_office,
            fiscal_year_end,
            board_size.and_then(|n| u32::try_from(n).ok()),
            officer_titles,
            annual_meeting_month,
            quorum_percentage.and_then(|n| u8::try_from(n).ok()),
        ) {
            (
                Some(company_name),
                Some(principal_office),
                Some(fiscal_year_end),
                Some(board_size),
                Some(officer_titles),
                Some(annual_meeting_month),
                Some(quorum_percentage),
            ) if errors.is_empty() => Ok(BylawsRecord {
                company_name,
                principal_office: principal_office.to_string(),
                fiscal_year_end,
                board_size,
                officer_titles,
                annual_meeting_month,
                quorum_percentage,
            }),
            _ => Err(errors),
        }
    }
}

impl FieldSource for BylawsRecord {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "company_name" => Some(self.company_name.clone()),
            "company_name_upper" => Some(self.company_name.to_uppercase()),
            "principal_office" => Some(self.principal_office.clone()),
            "fiscal_year_end" => Some(self.fiscal_year_end.clone()),
            "board_size" => Some(self.board_size.to_string()),
            "annual_meeting_month" => Some(self.annual_meeting_month.clone()),
            "quorum_percentage" => Some(self.quorum_percentage.to_string()),
            _ => None,
        }
    }

    fn list(&self, name: &str) -> Option<&[String]> {
        match name {
            "officer_titles" => Some(self.officer_titles.as_slice()),
            _ => None,
        }
    }
}

/// Generator for corporate bylaws.
#[derive(Debug, Clone, Default)]
pub struct BylawsGenerator {
    registry: TemplateRegistry,
    issue_date: Option<chrono::NaiveDate>,
}

impl BylawsGenerator {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            issue_date: None,
        }
    }

    /// Pin the document date instead of reading the clock.
    pub fn with_issue_date(mut self, date: chrono::NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }
}

impl Generator<BylawsRecord> for BylawsGenerator {
    fn generate(&self, record: &BylawsRecord) -> Result<GeneratedDocument, GeneratorError> {
        let context = self
            .issue_date
            .map_or_else(RenderContext::today, RenderContext::new);
        let pdf = PdfRenderEngine::render(self.registry.bylaws(), record, &context)?;

        Ok(GeneratedDocument {
            filename: bylaws_filename(record.company_name()),
            pdf,
            issued_on: context.date,
        })
    }
}
