//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::OnionResult;

/// Port for persisting architecture documents.
///
/// Implemented by:
/// - `onion_adapters::store::LocalConfigStore` (files on disk)
/// - `onion_adapters::store::MemoryConfigStore` (testing)
///
/// The store moves text only. Parsing and validation stay in the core.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Read the whole document at `path`.
    ///
    /// A missing document is `ApplicationError::DocumentNotFound`.
    fn read(&self, path: &Path) -> OnionResult<String>;

    /// Replace the document at `path`, creating it if needed.
    fn write(&self, path: &Path, contents: &str) -> OnionResult<()>;

    /// Check if a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
