//! Command handlers.
//!
//! Each handler translates parsed arguments into facade calls and prints the
//! result. Rules live in `onion-core`; nothing here decides what a valid
//! architecture is.

use std::path::{Path, PathBuf};

use tracing::debug;

use onion_adapters::LocalConfigStore;
use onion_core::application::{ConfigFacade, ConfigStore};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

pub mod add;
pub mod completions;
pub mod config;
pub mod connect;
pub mod init;
pub mod remove;
pub mod show;
pub mod targets;
pub mod validate;

/// An architecture document on disk and the facade editing it.
pub struct Workspace {
    path: PathBuf,
    store: LocalConfigStore,
    facade: ConfigFacade,
}

impl Workspace {
    /// `--file`, otherwise `defaults.file` from the settings.
    pub fn document_path(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
        global
            .file
            .clone()
            .unwrap_or_else(|| config.defaults.file.clone())
    }

    /// Wrap a facade that will be written to `path`.
    pub fn new(path: PathBuf, facade: ConfigFacade) -> Self {
        Self {
            path,
            store: LocalConfigStore::new(),
            facade,
        }
    }

    /// Load the document selected by the flags and settings.
    pub fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let path = Self::document_path(global, config);
        let store = LocalConfigStore::new();
        let mut facade = ConfigFacade::new();
        facade.load_from(&store, &path)?;
        debug!(path = %path.display(), "Workspace opened");
        Ok(Self {
            path,
            store,
            facade,
        })
    }

    /// Raw contents of the selected document, without parsing.
    pub fn read_raw(global: &GlobalArgs, config: &AppConfig) -> CliResult<(PathBuf, String)> {
        let path = Self::document_path(global, config);
        let contents = LocalConfigStore::new().read(&path)?;
        Ok((path, contents))
    }

    pub fn exists(&self) -> bool {
        self.store.exists(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn facade(&self) -> &ConfigFacade {
        &self.facade
    }

    pub fn facade_mut(&mut self) -> &mut ConfigFacade {
        &mut self.facade
    }

    pub fn save(&self) -> CliResult<()> {
        self.facade.save_to(&self.store, &self.path)?;
        Ok(())
    }
}
