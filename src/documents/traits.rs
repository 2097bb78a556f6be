//! Traits for generator system standardization.

use super::validation::ValidationErrors;
use super::{GeneratedDocument, GeneratorError};

/// Trait for turning a raw request into a validated record.
pub trait Validator {
    type Record;

    /// Check every field and return the typed record, or all violations found.
    fn validate(&self) -> Result<Self::Record, ValidationErrors>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: &Req) -> Result<GeneratedDocument, GeneratorError>;
}

/// Values a layout can pull from a record while rendering.
pub trait FieldSource {
    /// Scalar value for a `{name}` placeholder.
    fn field(&self, name: &str) -> Option<String>;

    /// Ordered values for a list expansion.
    fn list(&self, _name: &str) -> Option<&[String]> {
        None
    }
}
