//! Input validation module for document generators.
//!
//! Every rule reports into a shared [`ValidationErrors`] collection so a
//! request is checked in full and the client sees all problems at once.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use super::formation::EntityType;

/// US states, DC and the inhabited territories accepted as a state of formation.
pub const STATE_CODES: [&str; 56] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "PR", "GU", "VI", "AS", "MP",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

lazy_static! {
    static ref COMPANY_NAME: Regex = Regex::new(r"^[A-Za-z0-9\s,.'&]+$").unwrap();
    // Day is not checked against the month, so "02-30" is accepted.
    static ref FISCAL_YEAR_END: Regex =
        Regex::new(r"^(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap();
}

/// Validation error with detailed, user-friendly messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for how to fix the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must not be empty", label))
            .with_suggestion(format!("Provide a value for {}", label.to_lowercase()))
    }

    /// Create error for a field absent from the request
    pub fn missing_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required", label))
    }

    pub fn invalid_company_name(field: &str) -> Self {
        Self::new(
            field,
            "Company name can only contain alphanumeric characters, spaces, commas, periods, apostrophes, and ampersands",
        )
        .with_suggestion("Example: Acme Corp, Inc.")
    }

    pub fn invalid_state(field: &str, value: &str) -> Self {
        Self::new(field, format!("'{}' is not a valid US state or territory", value))
            .with_suggestion("Use a two-letter code such as DE or CA")
    }

    pub fn invalid_company_type(field: &str, value: &str) -> Self {
        Self::new(field, format!("Company type '{}' is not supported", value))
            .with_suggestion("Use exactly 'corporation' or 'LLC'")
    }

    pub fn invalid_fiscal_year_end(field: &str, value: &str) -> Self {
        Self::new(
            field,
            format!("Fiscal year end '{}' must be in MM-DD format", value),
        )
        .with_suggestion("Example: 12-31")
    }

    pub fn invalid_month(field: &str, value: &str) -> Self {
        Self::new(
            field,
            format!("'{}' is not a valid month name", value),
        )
        .with_suggestion("Use a full English month name with a capital letter, e.g. June")
    }

    pub fn not_an_integer(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must be an integer", label))
    }

    pub fn out_of_range(field: &str, label: &str, min: i64, max: Option<i64>) -> Self {
        let message = match max {
            Some(max) => format!("{} must be between {} and {}", label, min, max),
            None => format!("{} must be at least {}", label, min),
        };
        Self::new(field, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default, Clone)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// True if any error was reported against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// One-line summary suitable for an HTTP error body.
    pub fn summary(&self) -> String {
        let details: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        format!(
            "Validation failed with {} error(s): {}",
            self.errors.len(),
            details.join("; ")
        )
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is present and not empty after trimming
pub fn validate_required<'a>(
    value: Option<&'a str>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value {
        None => {
            errors.add(ValidationError::missing_field(field, label));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.add(ValidationError::empty_field(field, label));
            None
        }
        Some(v) => Some(v),
    }
}

/// Validate a company name against the allowed character set
pub fn validate_company_name(
    value: Option<&str>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = validate_required(value, field, "Company name", errors)?;
    if !COMPANY_NAME.is_match(value) {
        errors.add(ValidationError::invalid_company_name(field));
        return None;
    }
    Some(value.to_string())
}

/// Validate a state or territory code; returns it upper-cased
pub fn validate_state_code(
    value: Option<&str>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = validate_required(value, field, "State of formation", errors)?;
    let upper = value.to_uppercase();
    if !STATE_CODES.contains(&upper.as_str()) {
        errors.add(ValidationError::invalid_state(field, value));
        return None;
    }
    Some(upper)
}

/// Validate the entity type, which is matched case-sensitively
pub fn validate_company_type(
    value: Option<&str>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<EntityType> {
    let value = validate_required(value, field, "Company type", errors)?;
    match EntityType::parse(value) {
        Some(kind) => Some(kind),
        None => {
            errors.add(ValidationError::invalid_company_type(field, value));
            None
        }
    }
}

/// Validate a MM-DD fiscal year end
pub fn validate_fiscal_year_end(
    value: Option<&str>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = validate_required(value, field, "Fiscal year end", errors)?;
    if !FISCAL_YEAR_END.is_match(value) {
        errors.add(ValidationError::invalid_fiscal_year_end(field, value));
        return None;
    }
    Some(value.to_string())
}

/// Validate a full English month name (case-sensitive)
pub fn validate_month_name(
    value: Option<&str>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = validate_required(value, field, "Annual meeting month", errors)?;
    if !MONTH_NAMES.contains(&value) {
        errors.add(ValidationError::invalid_month(field, value));
        return None;
    }
    Some(value.to_string())
}

/// Integers, floats with no fractional part (`5.0`) and numeric strings (`"5"`).
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate a JSON integer within `[min, max]` (`max` of `None` means unbounded)
pub fn validate_integer(
    value: Option<&Value>,
    field: &str,
    label: &str,
    min: i64,
    max: Option<i64>,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        errors.add(ValidationError::missing_field(field, label));
        return None;
    };
    let Some(number) = coerce_integer(value) else {
        errors.add(ValidationError::not_an_integer(field, label));
        return None;
    };
    if number < min || max.is_some_and(|max| number > max) {
        errors.add(ValidationError::out_of_range(field, label, min, max));
        return None;
    }
    Some(number)
}

/// Validate a JSON array of strings; empty arrays and duplicates are allowed
pub fn validate_string_list(
    value: Option<&Value>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<Vec<String>> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        errors.add(ValidationError::missing_field(field, label));
        return None;
    };
    let Some(items) = value.as_array() else {
        errors.add(ValidationError::new(
            field,
            format!("{} must be a list of strings", label),
        ));
        return None;
    };

    let mut titles = Vec::with_capacity(items.len());
    let before = errors.len();
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => titles.push(s.to_string()),
            None => errors.add(ValidationError::new(
                format!("{}[{}]", field, i),
                format!("{} entries must be strings", label),
            )),
        }
    }
    (errors.len() == before).then_some(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_missing_and_empty() {
        let mut errors = ValidationErrors::new();
        assert!(validate_required(None, "a", "Alpha", &mut errors).is_none());
        assert!(validate_required(Some("   "), "b", "Beta", &mut errors).is_none());
        assert_eq!(errors.len(), 2);
        assert!(errors.summary().contains("Alpha is required"));
        assert!(errors.summary().contains("Beta must not be empty"));
    }

    #[test]
    fn test_company_name_charset() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            validate_company_name(Some("Smith & Sons, LLC"), "company_name", &mut errors),
            Some("Smith & Sons, LLC".to_string())
        );
        assert!(validate_company_name(Some("O'Brien Holdings"), "company_name", &mut errors).is_some());
        assert!(errors.is_empty());

        assert!(validate_company_name(Some("Bad <Name>"), "company_name", &mut errors).is_none());
        assert!(validate_company_name(Some("Acme @ Home"), "company_name", &mut errors).is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_every_state_code_is_accepted_case_insensitively() {
        for code in STATE_CODES {
            let mut errors = ValidationErrors::new();
            let lower = code.to_lowercase();
            assert_eq!(
                validate_state_code(Some(&lower), "state_of_formation", &mut errors),
                Some(code.to_string())
            );
            assert!(errors.is_empty(), "{} rejected", code);
        }
    }

    #[test]
    fn test_unknown_state_codes_rejected() {
        for code in ["XX", "D", "DEL", "ZZ", "Delaware"] {
            let mut errors = ValidationErrors::new();
            assert!(validate_state_code(Some(code), "state_of_formation", &mut errors).is_none());
            assert!(errors.has_field("state_of_formation"));
        }
    }

    #[test]
    fn test_company_type_is_case_sensitive() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            validate_company_type(Some("LLC"), "company_type", &mut errors),
            Some(EntityType::Llc)
        );
        assert_eq!(
            validate_company_type(Some("corporation"), "company_type", &mut errors),
            Some(EntityType::Corporation)
        );
        assert!(errors.is_empty());

        assert!(validate_company_type(Some("llc"), "company_type", &mut errors).is_none());
        assert!(validate_company_type(Some("Corporation"), "company_type", &mut errors).is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_fiscal_year_end_formats() {
        let mut errors = ValidationErrors::new();
        for ok in ["12-31", "01-01", "06-30"] {
            assert!(validate_fiscal_year_end(Some(ok), "fiscal_year_end", &mut errors).is_some());
        }
        assert!(errors.is_empty());

        for bad in ["13-31", "00-10", "12-32", "1-31", "12/31", "", "12-31 "] {
            let mut errors = ValidationErrors::new();
            assert!(
                validate_fiscal_year_end(Some(bad), "fiscal_year_end", &mut errors).is_none(),
                "{:?} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_fiscal_year_end_does_not_check_day_against_month() {
        // Known gap: calendar validity is not enforced.
        let mut errors = ValidationErrors::new();
        assert_eq!(
            validate_fiscal_year_end(Some("02-30"), "fiscal_year_end", &mut errors),
            Some("02-30".to_string())
        );
        assert!(validate_fiscal_year_end(Some("04-31"), "fiscal_year_end", &mut errors).is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_month_names_exact() {
        let mut errors = ValidationErrors::new();
        for month in MONTH_NAMES {
            assert!(validate_month_name(Some(month), "m", &mut errors).is_some());
        }
        assert!(errors.is_empty());
        assert!(validate_month_name(Some("june"), "m", &mut errors).is_none());
        assert!(validate_month_name(Some("Jun"), "m", &mut errors).is_none());
        assert!(validate_month_name(Some("InvalidMonth"), "m", &mut errors).is_none());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_integer_coerces_whole_floats_and_numeric_strings() {
        let mut errors = ValidationErrors::new();
        assert_eq!(validate_integer(Some(&json!(5.0)), "b", "Board", 1, None, &mut errors), Some(5));
        assert_eq!(validate_integer(Some(&json!("5")), "b", "Board", 1, None, &mut errors), Some(5));
        assert_eq!(validate_integer(Some(&json!(" 51 ")), "q", "Quorum", 0, Some(100), &mut errors), Some(51));
        assert!(errors.is_empty());

        assert!(validate_integer(Some(&json!("101")), "q", "Quorum", 0, Some(100), &mut errors).is_none());
        assert!(validate_integer(Some(&json!("5.5")), "b", "Board", 1, None, &mut errors).is_none());
        assert_eq!(errors.len(), 2);
        assert!(errors.summary().contains("Board must be an integer"));
    }

    #[test]
    fn test_integer_bounds_and_types() {
        let mut errors = ValidationErrors::new();
        assert_eq!(validate_integer(Some(&json!(0)), "q", "Quorum", 0, Some(100), &mut errors), Some(0));
        assert_eq!(validate_integer(Some(&json!(100)), "q", "Quorum", 0, Some(100), &mut errors), Some(100));
        assert_eq!(validate_integer(Some(&json!(99)), "b", "Board", 1, None, &mut errors), Some(99));
        assert!(errors.is_empty());

        assert!(validate_integer(Some(&json!(101)), "q", "Quorum", 0, Some(100), &mut errors).is_none());
        assert!(validate_integer(Some(&json!(-1)), "q", "Quorum", 0, Some(100), &mut errors).is_none());
        assert!(validate_integer(Some(&json!(0)), "b", "Board", 1, None, &mut errors).is_none());
        assert!(validate_integer(Some(&json!("five")), "b", "Board", 1, None, &mut errors).is_none());
        assert!(validate_integer(Some(&json!(2.5)), "b", "Board", 1, None, &mut errors).is_none());
        assert!(validate_integer(Some(&json!(true)), "b", "Board", 1, None, &mut errors).is_none());
        assert!(validate_integer(None, "b", "Board", 1, None, &mut errors).is_none());
        assert_eq!(errors.len(), 7);
        assert!(errors.summary().contains("Board must be at least 1"));
        assert!(errors.summary().contains("Quorum must be between 0 and 100"));
    }

    #[test]
    fn test_string_list_allows_empty_and_duplicates() {
        let mut errors = ValidationErrors::new();
        assert_eq!(validate_string_list(Some(&json!([])), "o", "Officers", &mut errors), Some(vec![]));
        assert_eq!(
            validate_string_list(Some(&json!(["Secretary", "Secretary"])), "o", "Officers", &mut errors),
            Some(vec!["Secretary".to_string(), "Secretary".to_string()])
        );
        assert!(errors.is_empty());

        assert!(validate_string_list(Some(&json!(["CEO", 3])), "o", "Officers", &mut errors).is_none());
        assert!(errors.has_field("o[1]"));
        assert!(validate_string_list(Some(&json!("CEO")), "o", "Officers", &mut errors).is_none());
    }

    #[test]
    fn test_error_display_includes_suggestion() {
        let error = ValidationError::invalid_fiscal_year_end("fiscal_year_end", "13-31");
        let text = error.to_string();
        assert!(text.starts_with("[fiscal_year_end]"));
        assert!(text.contains("MM-DD"));
        assert!(text.contains("12-31"));
    }
}
