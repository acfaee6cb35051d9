//! The single owner of the current configuration snapshot.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::trace;

use crate::domain::Configuration;

/// Holds the current [`Configuration`] and the only way to change it.
///
/// Snapshots are handed out as `Arc<Configuration>`. An update never touches
/// a handed-out snapshot; it builds a new value and swaps the pointer, so a
/// caller holding an older `Arc` keeps a frozen view of that state.
///
/// `ConfigState` is not synchronised. A concurrent host must serialise calls,
/// e.g. by wrapping it in a `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    current: Arc<Configuration>,
    revision: u64,
}

impl ConfigState {
    pub fn new(initial: Configuration) -> Self {
        Self {
            current: Arc::new(initial),
            revision: 0,
        }
    }

    /// A configuration with all collections empty and default frameworks.
    pub fn empty_config() -> Configuration {
        Configuration::empty()
    }

    /// The current snapshot.
    pub fn data(&self) -> Arc<Configuration> {
        Arc::clone(&self.current)
    }

    /// Number of updates applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run `updater` against the current snapshot and store its result.
    ///
    /// If `updater` fails, the stored snapshot and revision are unchanged and
    /// the error is returned as is. Every mutation in the engine goes through
    /// here.
    pub fn update<F, E>(&mut self, updater: F) -> Result<Arc<Configuration>, E>
    where
        F: FnOnce(&Configuration) -> Result<Configuration, E>,
    {
        let next = updater(&self.current)?;
        self.current = Arc::new(next);
        self.revision += 1;
        trace!(revision = self.revision, "Configuration updated");
        Ok(self.data())
    }

    /// [`Self::update`] for updaters that cannot fail.
    pub fn apply<F>(&mut self, updater: F) -> Arc<Configuration>
    where
        F: FnOnce(&Configuration) -> Configuration,
    {
        match self.update(|current| Ok::<_, Infallible>(updater(current))) {
            Ok(config) => config,
            Err(never) => match never {},
        }
    }

    /// Swap in a whole configuration, e.g. one loaded from a file.
    pub fn replace(&mut self, config: Configuration) -> Arc<Configuration> {
        self.apply(|_| config)
    }
}
