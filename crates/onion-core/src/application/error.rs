//! Application layer errors.
//!
//! These errors represent failures at the boundary (parsing, storage), not
//! violations of the graph rules. Rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while moving documents in and out of the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The document is not syntactically valid JSON.
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// The document is JSON but not shaped like a configuration.
    #[error("Document does not match the configuration schema: {reason}")]
    SchemaMismatch { reason: String },

    /// A store could not read or write a document.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// No document exists at the requested location.
    #[error("No configuration found at {path}")]
    DocumentNotFound { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Configuration store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Classify a serde_json failure: syntax problems are invalid JSON, data
    /// problems are schema mismatches.
    pub fn from_json(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::SchemaMismatch {
                reason: err.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => Self::InvalidJson {
                reason: err.to_string(),
            },
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidJson { .. } => vec![
                "The file is not valid JSON".into(),
                "Check for trailing commas and unbalanced brackets".into(),
            ],
            Self::SchemaMismatch { .. } => vec![
                "Required fields: entities, domainServices, applicationServices,".into(),
                "  domainServiceConnections, applicationServiceDependencies".into(),
                "Try: onion init --sample to see a complete document".into(),
            ],
            Self::Storage { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::DocumentNotFound { path } => vec![
                format!("Nothing at {}", path.display()),
                "Create one with: onion init".into(),
                "Or point to an existing document with --file".into(),
            ],
            Self::StoreLockError => vec![
                "The configuration store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidJson { .. } | Self::SchemaMismatch { .. } => ErrorCategory::Validation,
            Self::DocumentNotFound { .. } => ErrorCategory::NotFound,
            Self::Storage { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
