//! Input validation for company formation requests.
//!
//! Every field is checked and all failures are collected, so a caller sees
//! each rejected field in one response.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::model::{CompanyType, FormationRequest, RawFormationRequest, US_STATES_AND_TERRITORIES};

/// Longest incorporator name that always fits the signature block.
pub const MAX_INCORPORATOR_NAME_CHARS: usize = 150;

lazy_static! {
    static ref COMPANY_NAME_RE: Regex =
        Regex::new(r"^[A-Za-z0-9\s,.'&]+$").expect("company name pattern is valid");
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(field, format!("{} is required", field))
    }

    pub fn invalid_company_name(field: &str) -> Self {
        Self::new(
            field,
            "Company name can only contain alphanumeric characters, spaces, commas, periods, apostrophes, and ampersands",
        )
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(field, format!("must be at most {} characters", max))
    }

    pub fn unprintable_characters(field: &str, rejected: &str) -> Self {
        Self::new(
            field,
            format!(
                "contains characters that cannot be printed on the certificate: {}",
                rejected
            ),
        )
    }

    pub fn invalid_state(field: &str) -> Self {
        Self::new(field, "Invalid US state or territory")
    }

    pub fn unsupported_company_type(field: &str, value: &str) -> Self {
        Self::new(
            field,
            format!(
                "Unsupported company type '{}', expected 'corporation' or 'LLC'",
                value
            ),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
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

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Field checks
// ============================================================================

/// Returns the value when present and not blank.
fn require<'a>(
    value: &'a Option<String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(ValidationError::missing_field(field));
            None
        }
    }
}

fn check_company_name(value: &str, field: &str, errors: &mut ValidationErrors) -> bool {
    if COMPANY_NAME_RE.is_match(value) {
        true
    } else {
        errors.add(ValidationError::invalid_company_name(field));
        false
    }
}

/// Printable with the built-in PDF fonts: ASCII and the Latin-1 supplement.
fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}')
}

fn check_incorporator_name(value: &str, field: &str, errors: &mut ValidationErrors) -> bool {
    let mut ok = true;

    if value.chars().count() > MAX_INCORPORATOR_NAME_CHARS {
        errors.add(ValidationError::too_long(field, MAX_INCORPORATOR_NAME_CHARS));
        ok = false;
    }

    let rejected: String = value.chars().filter(|c| !is_printable(*c)).collect();
    if !rejected.is_empty() {
        errors.add(ValidationError::unprintable_characters(
            field,
            &format!("{:?}", rejected),
        ));
        ok = false;
    }

    ok
}

/// Upper-cases and looks the code up in the 56-entry set.
pub fn normalize_state(value: &str) -> Option<String> {
    let code = value.to_ascii_uppercase();
    US_STATES_AND_TERRITORIES
        .contains(&code.as_str())
        .then_some(code)
}

/// Validate a raw payload into a [`FormationRequest`].
pub fn validate(raw: &RawFormationRequest) -> Result<FormationRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let company_name = require(&raw.company_name, "company_name", &mut errors)
        .filter(|name| check_company_name(name, "company_name", &mut errors));

    let state_of_formation = require(&raw.state_of_formation, "state_of_formation", &mut errors)
        .and_then(|state| {
            let normalized = normalize_state(state);
            if normalized.is_none() {
                errors.add(ValidationError::invalid_state("state_of_formation"));
            }
            normalized
        });

    let company_type =
        require(&raw.company_type, "company_type", &mut errors).and_then(|value| {
            let parsed = CompanyType::parse(value);
            if parsed.is_none() {
                errors.add(ValidationError::unsupported_company_type(
                    "company_type",
                    value,
                ));
            }
            parsed
        });

    let incorporator_name = require(&raw.incorporator_name, "incorporator_name", &mut errors)
        .filter(|name| check_incorporator_name(name, "incorporator_name", &mut errors));

    match (company_name, state_of_formation, company_type, incorporator_name) {
        (Some(company_name), Some(state_of_formation), Some(company_type), Some(incorporator_name)) => {
            Ok(FormationRequest {
                company_name: company_name.to_string(),
                state_of_formation,
                company_type,
                incorporator_name: incorporator_name.to_string(),
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, state: &str, kind: &str) -> RawFormationRequest {
        RawFormationRequest::new(name, state, kind, "John Smith")
    }

    #[test]
    fn test_valid_request() {
        let request = validate(&raw("Acme Corp, Inc.", "DE", "corporation")).unwrap();
        assert_eq!(request.company_name(), "Acme Corp, Inc.");
        assert_eq!(request.state_of_formation(), "DE");
        assert_eq!(request.company_type(), CompanyType::Corporation);
        assert_eq!(request.incorporator_name(), "John Smith");
    }

    #[test]
    fn test_company_name_character_class() {
        assert!(validate(&raw("Acme, Inc.", "DE", "LLC")).is_ok());
        assert!(validate(&raw("Smith & Sons' Co.", "DE", "LLC")).is_ok());

        let errors = validate(&raw("Acme!", "DE", "LLC")).unwrap_err();
        assert!(errors.has_field("company_name"));
        assert_eq!(errors.len(), 1);

        assert!(validate(&raw("Acme/Corp", "DE", "LLC")).is_err());
        assert!(validate(&raw("Acme (US)", "DE", "LLC")).is_err());
    }

    #[test]
    fn test_blank_company_name_is_missing() {
        let errors = validate(&raw("   ", "DE", "LLC")).unwrap_err();
        assert_eq!(errors.errors()[0].message, "company_name is required");
    }

    #[test]
    fn test_state_is_case_insensitive() {
        for input in ["ca", "Ca", "cA", "CA"] {
            let request = validate(&raw("Acme", input, "LLC")).unwrap();
            assert_eq!(request.state_of_formation(), "CA");
        }
    }

    #[test]
    fn test_state_is_not_trimmed() {
        let errors = validate(&raw("Acme", " de ", "LLC")).unwrap_err();
        assert!(errors.has_field("state_of_formation"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_incorporator_name_length() {
        let longest = "J".repeat(MAX_INCORPORATOR_NAME_CHARS);
        let request =
            validate(&RawFormationRequest::new("Acme", "DE", "LLC", &longest)).unwrap();
        assert_eq!(request.incorporator_name(), longest);

        let name = "Jo ".repeat(83);
        let errors =
            validate(&RawFormationRequest::new("Acme", "DE", "LLC", name.trim())).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "incorporator_name: must be at most 150 characters"
        );
    }

    #[test]
    fn test_incorporator_name_characters() {
        let request =
            validate(&RawFormationRequest::new("Acme", "DE", "LLC", "José Müller")).unwrap();
        assert_eq!(request.incorporator_name(), "José Müller");

        let errors =
            validate(&RawFormationRequest::new("Acme", "DE", "LLC", "李雷")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("incorporator_name"));
        assert_eq!(
            errors.to_string(),
            "incorporator_name: contains characters that cannot be printed on the certificate: \"李雷\""
        );

        assert!(validate(&RawFormationRequest::new("Acme", "DE", "LLC", "Jane\tDoe")).is_err());
    }

    #[test]
    fn test_unknown_state_rejected() {
        let errors = validate(&raw("Acme", "ZZ", "LLC")).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "state_of_formation: Invalid US state or territory"
        );
    }

    #[test]
    fn test_company_type_is_exact_case() {
        assert!(validate(&raw("Acme", "DE", "llc")).is_err());
        assert!(validate(&raw("Acme", "DE", "Corporation")).is_err());

        let errors = validate(&raw("Acme", "DE", "partnership")).unwrap_err();
        assert!(errors.to_string().contains("Unsupported company type"));
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = validate(&RawFormationRequest::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in [
            "company_name",
            "state_of_formation",
            "company_type",
            "incorporator_name",
        ] {
            assert!(errors.has_field(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_errors_are_joined() {
        let errors = validate(&raw("Acme!", "ZZ", "LLC")).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "company_name: Company name can only contain alphanumeric characters, spaces, commas, periods, apostrophes, and ampersands; state_of_formation: Invalid US state or territory"
        );
    }
}
