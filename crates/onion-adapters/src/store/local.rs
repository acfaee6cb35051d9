//! Local document store using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use onion_core::{
    application::{ApplicationError, ports::ConfigStore},
    error::{OnionError, OnionResult},
};

/// Production store: one JSON document per file.
#[derive(Debug, Clone, Copy)]
pub struct LocalConfigStore;

impl LocalConfigStore {
    /// Create a new local store adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for LocalConfigStore {
    fn read(&self, path: &Path) -> OnionResult<String> {
        debug!(path = %path.display(), "Reading document");
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::DocumentNotFound {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "read document"),
        })
    }

    /// Parent directories are created as needed.
    fn write(&self, path: &Path, contents: &str) -> OnionResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }
        debug!(path = %path.display(), bytes = contents.len(), "Writing document");
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write document"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> OnionError {
    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
