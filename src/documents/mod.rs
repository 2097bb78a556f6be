//! Documents module - validation, layouts and PDF rendering for company formation filings.
//!
//! This module contains the core of the service:
//! - `formation` - Certificate / Articles for Delaware and California entities
//! - `bylaws` - Corporate bylaws, independent of jurisdiction
//! - `registry` - Lookup of the static layout for a (jurisdiction, entity type) pair
//! - `engine` - Walks a layout and a record and produces an in-memory PDF

pub mod bylaws;
pub mod common;
pub mod engine;
pub mod extract;
pub mod fonts;
pub mod formation;
pub mod layout;
pub mod registry;
pub mod templates;
pub mod traits;
pub mod validation;

pub use bylaws::{BylawsGenerator, BylawsRecord, BylawsRequest};
pub use engine::{PdfRenderEngine, RenderContext};
pub use formation::{CompanyFormationRecord, CompanyFormationRequest, EntityType, FormationGenerator};
pub use registry::{RegistryError, TemplateRegistry};
pub use traits::{FieldSource, Generator, Validator};

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("layout references unknown placeholder '{0}'")]
    UnknownPlaceholder(String),
    #[error("layout references unknown list '{0}'")]
    UnknownList(String),
    #[error("failed to assemble PDF: {0}")]
    Pdf(String),
}

impl GeneratorError {
    /// Whether the error was caused by the request rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GeneratorError::Registry(_))
    }
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub issued_on: NaiveDate,
}
