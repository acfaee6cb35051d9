//! Validation Service - reports and gates over configurations and documents.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, schema},
    domain::{ConfigValidator, Configuration, DomainError},
    error::OnionResult,
};

/// Outcome of an aggregating validation.
///
/// `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_violations(violations: &[DomainError]) -> Self {
        Self {
            valid: violations.is_empty(),
            errors: violations.iter().map(ToString::to_string).collect(),
        }
    }

    /// A report carrying a single problem that stopped validation early.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![reason.into()],
        }
    }
}

pub struct ValidationService;

impl ValidationService {
    /// Every rule violation in a typed configuration.
    #[instrument(skip_all)]
    pub fn validate_config_structure(config: &Configuration) -> ValidationReport {
        let violations = ConfigValidator::violations(config);
        debug!(count = violations.len(), "Structure validated");
        ValidationReport::from_violations(&violations)
    }

    /// Every violation in a raw JSON document, including shape problems the
    /// typed model cannot represent. Never fails.
    #[instrument(skip_all, fields(len = json.len()))]
    pub fn validate_document(json: &str) -> ValidationReport {
        let document: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Document is not JSON");
                return ValidationReport::rejected(ApplicationError::from_json(&e).to_string());
            }
        };

        let violations = schema::document_violations(&document);
        debug!(count = violations.len(), "Document validated");
        ValidationReport::from_violations(&violations)
    }

    /// Fail-fast gate: `Ok(true)` or the first problem as an error.
    ///
    /// Parsing problems surface as [`ApplicationError`], rule violations as
    /// [`DomainError`], both wrapped in [`crate::OnionError`].
    #[instrument(skip_all)]
    pub fn is_user_config_valid(json: &str) -> OnionResult<bool> {
        let config = schema::parse_configuration(json)?;
        ConfigValidator::first_violation(&config)?;
        Ok(true)
    }

    /// Parse a document into the typed model without checking rules.
    pub fn map_file_to_config(json: &str) -> OnionResult<Configuration> {
        schema::parse_configuration(json)
    }
}
