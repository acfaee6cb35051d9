//! Onion Core - Onion Architecture Configuration Engine
//!
//! This crate holds the domain and application layers of the Onion tool. It
//! keeps an in-memory model of a layered ("onion") architecture and enforces
//! which ring may depend on which.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            onion-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │             ConfigFacade                │
//! │  (lifecycle, connections, validation)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (ConfigStore)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     onion-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer: Configuration, Ring, RepositoryNamingService, RULES
//! ```
//!
//! ## Rings
//!
//! ```text
//! application service ──▶ domain service ──▶ entity
//! application service ──▶ I<Entity>Repository
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use onion_core::prelude::*;
//!
//! let mut facade = ConfigFacade::new();
//! facade.add_entity("User");
//! facade.add_domain_service("UserService");
//! facade.add_connection("UserService", "User").unwrap();
//!
//! assert!(facade.validate().valid);
//! assert!(facade.add_connection("User", "UserService").is_err());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ConfigFacade, ConfigState, ConfigStore, ConnectionOutcome,
        ValidationReport, ValidationService,
    };
    pub use crate::domain::{
        AppServiceDependencies, Configuration, ConnectionError, DiFramework, DomainError,
        RepositoryNamingService, Ring, UiFramework,
    };
    pub use crate::error::{OnionError, OnionResult};
}

pub use error::{OnionError, OnionResult};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
