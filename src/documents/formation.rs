//! Generator for formation filings (certificate / articles).
//!
//! Produces the Delaware Certificate of Incorporation or Certificate of
//! Formation, or the California Articles of Incorporation or Articles of
//! Organization, depending on the state and entity type of the request.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::common::certificate_filename;
use super::engine::{PdfRenderEngine, RenderContext};
use super::registry::TemplateRegistry;
use super::traits::{FieldSource, Generator, Validator};
use super::validation::{
    validate_company_name, validate_company_type, validate_required, validate_state_code,
    ValidationErrors,
};
use super::{GeneratedDocument, GeneratorError};

/// Kind of entity being formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EntityType {
    #[serde(rename = "corporation")]
    Corporation,
    #[serde(rename = "LLC")]
    Llc,
}

impl EntityType {
    /// Exact, case-sensitive match on the wire name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "corporation" => Some(EntityType::Corporation),
            "LLC" => Some(EntityType::Llc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Corporation => "corporation",
            EntityType::Llc => "LLC",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw formation request as received over JSON or a form post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CompanyFormationRequest {
    #[serde(default)]
    #[schema(example = "Acme Corp, Inc.")]
    pub company_name: Option<String>,
    #[serde(default)]
    #[schema(example = "DE")]
    pub state_of_formation: Option<String>,
    #[serde(default)]
    #[schema(example = "corporation")]
    pub company_type: Option<String>,
    #[serde(default)]
    #[schema(example = "John Smith")]
    pub incorporator_name: Option<String>,
}

/// Validated formation data. Only obtainable through [`Validator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyFormationRecord {
    company_name: String,
    state_of_formation: String,
    company_type: EntityType,
    incorporator_name: String,
}

impl CompanyFormationRecord {
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Always upper-case.
    pub fn state_of_formation(&self) -> &str {
        &self.state_of_formation
    }

    pub fn company_type(&self) -> EntityType {
        self.company_type
    }

    pub fn incorporator_name(&self) -> &str {
        &self.incorporator_name
    }
}

impl Validator for CompanyFormationRequest {
    type Record = CompanyFormationRecord;

    fn validate(&self) -> Result<CompanyFormationRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let company_name =
            validate_company_name(self.company_name.as_deref(), "company_name", &mut errors);
        let state_of_formation = validate_state_code(
            self.state_of_formation.as_deref(),
            "state_of_formation",
            &mut errors,
        );
        let company_type =
            validate_company_type(self.company_type.as_deref(), "company_type", &mut errors);
        let incorporator_name = validate_required(
            self.incorporator_name.as_deref(),
            "incorporator_name",
            "Incorporator name",
            &mut errors,
        );

        match (company_name, state_of_formation, company_type, incorporator_name) {
            (Some(company_name), Some(state_of_formation), Some(company_type), Some(incorporator))
                if errors.is_empty() =>
            {
                Ok(CompanyFormationRecord {
                    company_name,
                    state_of_formation,
                    company_type,
                    incorporator_name: incorporator.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl FieldSource for CompanyFormationRecord {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "company_name" => Some(self.company_name.clone()),
            "state_of_formation" => Some(self.state_of_formation.clone()),
            "company_type" => Some(self.company_type.to_string()),
            "incorporator_name" => Some(self.incorporator_name.clone()),
            _ => None,
        }
    }
}

/// Generator for Delaware and California formation filings.
#[derive(Debug, Clone, Default)]
pub struct FormationGenerator {
    registry: TemplateRegistry,
    issue_date: Option<chrono::NaiveDate>,
}

impl FormationGenerator {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            issue_date: None,
        }
    }

    /// Pin the execution date instead of reading the clock.
    pub fn with_issue_date(mut self, date: chrono::NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }
}

impl Generator<CompanyFormationRecord> for FormationGenerator {
    fn generate(
        &self,
        record: &CompanyFormationRecord,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let layout = self
            .registry
            .formation(record.state_of_formation(), record.company_type())?;
        let context = self
            .issue_date
            .map_or_else(RenderContext::today, RenderContext::new);
        let pdf = PdfRenderEngine::render(layout, record, &context)?;

        Ok(GeneratedDocument {
            filename: certificate_filename(record.company_name()),
            pdf,
            issued_on: context.date,
        })
    }
}
