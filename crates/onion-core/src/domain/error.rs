// ============================================================================
// domain/error.rs - STRUCTURAL VIOLATIONS AND EDGE REJECTIONS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Ring;

/// Root domain error type.
///
/// Every variant is one structural violation of a configuration graph. The
/// aggregating validator collects them; the fail-fast gate returns the first.
///
/// All errors are:
/// - Cloneable (collected into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Domain service connections
    // ========================================================================
    #[error("Domain service '{service}' has connections but is not declared in domainServices")]
    UnknownDomainService { service: String },

    #[error(
        "Entity '{entity}' referenced by domain service '{service}' does not exist in entities"
    )]
    UnknownEntity { entity: String, service: String },

    // ========================================================================
    // Application service dependencies
    // ========================================================================
    #[error(
        "Application service '{service}' has dependencies but is not declared in applicationServices"
    )]
    UnknownApplicationService { service: String },

    #[error(
        "Domain service '{domain_service}' referenced by application service '{service}' does not exist in domainServices"
    )]
    UnknownDomainServiceReference {
        domain_service: String,
        service: String,
    },

    #[error(
        "Repository '{repository}' referenced by application service '{service}' does not match the I<Entity>Repository format"
    )]
    InvalidRepositoryName { repository: String, service: String },

    #[error(
        "Repository '{repository}' referenced by application service '{service}' points to entity '{entity}', which does not exist in entities"
    )]
    UnknownRepositoryEntity {
        repository: String,
        entity: String,
        service: String,
    },

    // ========================================================================
    // Document shape
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' is malformed: expected {expected}")]
    MalformedField { field: String, expected: &'static str },

    #[error("Invalid {field} '{value}': expected one of {allowed}")]
    InvalidFramework {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Framework field '{field}' is not set")]
    MissingFramework { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownDomainService { service } => vec![
                format!("Add '{}' to domainServices", service),
                format!("Or remove the '{}' entry from domainServiceConnections", service),
            ],
            Self::UnknownEntity { entity, service } => vec![
                format!("Add the entity '{}' to entities", entity),
                format!("Or disconnect '{}' from '{}'", service, entity),
            ],
            Self::UnknownApplicationService { service } => vec![
                format!("Add '{}' to applicationServices", service),
                format!(
                    "Or remove the '{}' entry from applicationServiceDependencies",
                    service
                ),
            ],
            Self::UnknownDomainServiceReference {
                domain_service,
                service,
            } => vec![
                format!("Add '{}' to domainServices", domain_service),
                format!("Or disconnect '{}' from '{}'", service, domain_service),
            ],
            Self::InvalidRepositoryName { .. } => vec![
                "Repository names look like I<Entity>Repository, e.g. IUserRepository".into(),
                "The entity segment must start with an upper-case letter".into(),
            ],
            Self::UnknownRepositoryEntity { entity, .. } => vec![
                format!("Add the entity '{}' to entities", entity),
                "Repositories exist only for declared entities".into(),
            ],
            Self::InvalidFramework { allowed, .. } => {
                vec![format!("Supported values: {}", allowed)]
            }
            Self::MissingFramework { field } => vec![format!("Set '{}' explicitly", field)],
            _ => vec!["See documentation for the configuration format".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDomainService { .. }
            | Self::UnknownEntity { .. }
            | Self::UnknownApplicationService { .. }
            | Self::UnknownDomainServiceReference { .. }
            | Self::UnknownRepositoryEntity { .. } => ErrorCategory::Reference,
            Self::InvalidRepositoryName { .. }
            | Self::MissingField { .. }
            | Self::MalformedField { .. }
            | Self::InvalidFramework { .. }
            | Self::MissingFramework { .. } => ErrorCategory::Validation,
        }
    }
}

/// Why an edge edit was refused.
///
/// These are expected outcomes of interactive editing, reported as ordinary
/// negative results rather than failures of the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Unknown source node '{source_node}'")]
    UnknownSource { source_node: String },

    #[error("Unknown target node '{target}'")]
    UnknownTarget { target: String },

    #[error("A node cannot connect to itself: '{node}'")]
    SelfConnection { node: String },

    #[error("{source_ring} '{source_node}' cannot connect to {target_ring} '{target}'")]
    IncompatibleRings {
        source_node: String,
        source_ring: Ring,
        target: String,
        target_ring: Ring,
    },

    #[error("'{source_node}' is already connected to '{target}'")]
    AlreadyConnected { source_node: String, target: String },

    #[error("Connection from '{source_node}' to '{target}' not found")]
    NotFound { source_node: String, target: String },
}

impl ConnectionError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSource { source_node } => {
                vec![format!("Add '{}' as a domain or application service first", source_node)]
            }
            Self::UnknownTarget { target } => {
                vec![format!("Add '{}' to the configuration first", target)]
            }
            Self::IncompatibleRings { source_ring, .. } => {
                let allowed: Vec<&str> = source_ring
                    .allowed_targets()
                    .iter()
                    .map(Ring::as_str)
                    .collect();
                if allowed.is_empty() {
                    vec![format!("{} cannot depend on anything", source_ring)]
                } else {
                    vec![format!(
                        "{} may only connect to: {}",
                        source_ring,
                        allowed.join(", ")
                    )]
                }
            }
            Self::NotFound { source_node, .. } => {
                vec![format!("Try: onion targets {} --current", source_node)]
            }
            _ => vec![],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSource { .. } | Self::UnknownTarget { .. } | Self::NotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::IncompatibleRings { .. } | Self::SelfConnection { .. } => {
                ErrorCategory::Compatibility
            }
            Self::AlreadyConnected { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Reference,
    Compatibility,
    NotFound,
}
