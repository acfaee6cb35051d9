//! Application services - orchestrate use cases.
//!
//! Lifecycle and connection services borrow a [`super::ConfigState`] and
//! change it only through [`super::ConfigState::update`]. Validation is
//! stateless.

pub mod connection_service;
pub mod lifecycle_service;
pub mod validation_service;

pub use connection_service::{ConnectionOutcome, ConnectionService, EdgeKind};
pub use lifecycle_service::NodeLifecycleService;
pub use validation_service::{ValidationReport, ValidationService};
