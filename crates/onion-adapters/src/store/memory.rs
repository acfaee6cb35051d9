//! In-memory document store for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use onion_core::{
    application::{ApplicationError, ports::ConfigStore},
    error::OnionResult,
};

/// In-memory store. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    documents: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryConfigStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document (testing helper).
    pub fn with_document(
        self,
        path: impl Into<PathBuf>,
        contents: impl Into<String>,
    ) -> OnionResult<Self> {
        self.documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(path.into(), contents.into());
        Ok(self)
    }

    /// Paths of all stored documents.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.documents
            .read()
            .map(|documents| documents.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read(&self, path: &Path) -> OnionResult<String> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        documents.get(path).cloned().ok_or_else(|| {
            ApplicationError::DocumentNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, contents: &str) -> OnionResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        documents.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.documents
            .read()
            .map(|documents| documents.contains_key(path))
            .unwrap_or(false)
    }
}
