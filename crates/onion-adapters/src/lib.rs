//! Infrastructure adapters for Onion.
//!
//! This crate implements the ports defined in `onion_core::application::ports`
//! and ships the built-in sample architectures. All file I/O lives here.

pub mod presets;
pub mod store;

// Re-export commonly used adapters
pub use presets::Preset;
pub use store::{LocalConfigStore, MemoryConfigStore};
