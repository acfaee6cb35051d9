//! Application layer for Onion.
//!
//! This layer contains:
//! - **State**: the snapshot holder every mutation goes through
//! - **Services**: use cases (lifecycle, connections, validation)
//! - **Schema**: the JSON document format
//! - **Facade**: one entry point bundling all of the above
//! - **Ports**: traits for storage
//!
//! Structural rules live in `crate::domain`; this layer only orchestrates.

pub mod error;
pub mod facade;
pub mod ports;
pub mod schema;
pub mod services;
pub mod state;

pub use error::ApplicationError;
pub use facade::{ConfigFacade, Summary};
pub use ports::ConfigStore;
pub use services::{
    ConnectionOutcome, ConnectionService, EdgeKind, NodeLifecycleService, ValidationReport,
    ValidationService,
};
pub use state::ConfigState;
