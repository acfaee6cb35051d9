//! Application ports (traits) for external dependencies.
//!
//! Adapters in `onion-adapters` implement these.
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `ConfigStore`: reading and writing architecture documents
//! - **Driving (Input) Ports**: the [`super::ConfigFacade`] itself

pub mod output;

pub use output::ConfigStore;
