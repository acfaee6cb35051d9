//! Core domain layer for Onion.
//!
//! This module contains pure business logic: the configuration graph, the
//! repository naming convention, the ring rules and the invariant table.
//!
//! - **No I/O**: documents arrive as values, never as files
//! - **Synchronous**: every operation is O(size of graph)
//! - **Immutable snapshots**: `Configuration` is Clone + PartialEq and is
//!   replaced, never patched, once shared

pub mod entities;
pub mod error;
pub mod naming;
pub mod validation;
pub mod value_objects;

pub use entities::{AppServiceDependencies, Configuration};
pub use error::{ConnectionError, DomainError, ErrorCategory};
pub use naming::RepositoryNamingService;
pub use validation::{ConfigValidator, RULES, RuleDef};
pub use value_objects::{DiFramework, Ring, UiFramework};
