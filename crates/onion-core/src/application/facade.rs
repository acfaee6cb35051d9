//! Config Facade - one object exposing every engine operation.
//!
//! The facade owns the [`ConfigState`] and hands short-lived borrows of it to
//! the lifecycle and connection services. Callers never see the services.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ConfigState, ConnectionService, NodeLifecycleService, ValidationReport,
        ValidationService, ports::ConfigStore, schema, services::connection_service,
    },
    domain::{
        ConfigValidator, Configuration, ConnectionError, DomainError, RepositoryNamingService,
    },
    error::OnionResult,
};

/// Counts for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub folder_path: String,
    pub entities: usize,
    pub domain_services: usize,
    pub application_services: usize,
    pub edges: usize,
    pub ui_framework: Option<String>,
    pub di_framework: Option<String>,
    pub revision: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigFacade {
    state: ConfigState,
}

impl ConfigFacade {
    /// A facade over an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A facade starting from `config`. No rules are checked.
    pub fn with_config(config: Configuration) -> Self {
        Self {
            state: ConfigState::new(config),
        }
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn data(&self) -> Arc<Configuration> {
        self.state.data()
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    pub fn empty_config() -> Configuration {
        ConfigState::empty_config()
    }

    /// Replace the current configuration wholesale.
    pub fn load(&mut self, config: Configuration) -> Arc<Configuration> {
        self.state.replace(config)
    }

    /// Apply an arbitrary updater. A failing updater changes nothing.
    pub fn update<F, E>(&mut self, updater: F) -> Result<Arc<Configuration>, E>
    where
        F: FnOnce(&Configuration) -> Result<Configuration, E>,
    {
        self.state.update(updater)
    }

    // ------------------------------------------------------------------
    // Naming
    // ------------------------------------------------------------------

    pub fn is_repository_name(name: &str) -> bool {
        RepositoryNamingService::is_repository_name(name)
    }

    pub fn repository_for(entity: &str) -> String {
        RepositoryNamingService::repository_for(entity)
    }

    pub fn entity_of(repository: &str) -> Option<&str> {
        RepositoryNamingService::entity_of(repository)
    }

    /// Repository names derived from the current entities.
    pub fn repositories(&self) -> Vec<String> {
        RepositoryNamingService::repositories(&self.state.data().entities)
    }

    pub fn is_valid_repository(&self, name: &str) -> bool {
        RepositoryNamingService::is_valid_repository(name, &self.state.data().entities)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn add_entity(&mut self, name: &str) -> Arc<Configuration> {
        NodeLifecycleService::new(&mut self.state).add_entity(name)
    }

    pub fn add_domain_service(&mut self, name: &str) -> Arc<Configuration> {
        NodeLifecycleService::new(&mut self.state).add_domain_service(name)
    }

    pub fn add_application_service(&mut self, name: &str) -> Arc<Configuration> {
        NodeLifecycleService::new(&mut self.state).add_application_service(name)
    }

    pub fn remove_node(&mut self, name: &str) -> Arc<Configuration> {
        NodeLifecycleService::new(&mut self.state).remove_node(name)
    }

    // ------------------------------------------------------------------
    // Connections
    // ------------------------------------------------------------------

    pub fn add_connection(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<Arc<Configuration>, ConnectionError> {
        ConnectionService::new(&mut self.state).add_connection(source, target)
    }

    pub fn remove_connection(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<Arc<Configuration>, ConnectionError> {
        ConnectionService::new(&mut self.state).remove_connection(source, target)
    }

    pub fn has_connection(&self, source: &str, target: &str) -> bool {
        connection_service::has_connection(&self.state.data(), source, target)
    }

    pub fn validate_connection(&self, source: &str, target: &str) -> bool {
        connection_service::validate_connection(&self.state.data(), source, target)
    }

    /// Why `source → target` would be refused, if it would be.
    pub fn check_connection(&self, source: &str, target: &str) -> Result<(), ConnectionError> {
        connection_service::check_connection(&self.state.data(), source, target).map(|_| ())
    }

    pub fn possible_targets(&self, source: &str) -> Vec<String> {
        connection_service::possible_targets(&self.state.data(), source)
    }

    pub fn current_targets(&self, source: &str) -> Vec<String> {
        connection_service::current_targets(&self.state.data(), source)
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Aggregating report over the current configuration.
    pub fn validate(&self) -> ValidationReport {
        ValidationService::validate_config_structure(&self.state.data())
    }

    /// First violation in the current configuration, if any.
    pub fn first_violation(&self) -> Result<(), DomainError> {
        ConfigValidator::first_violation(&self.state.data())
    }

    pub fn validate_config_structure(config: &Configuration) -> ValidationReport {
        ValidationService::validate_config_structure(config)
    }

    pub fn validate_document(json: &str) -> ValidationReport {
        ValidationService::validate_document(json)
    }

    pub fn is_user_config_valid(json: &str) -> OnionResult<bool> {
        ValidationService::is_user_config_valid(json)
    }

    pub fn map_file_to_config(json: &str) -> OnionResult<Configuration> {
        ValidationService::map_file_to_config(json)
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    pub fn to_json(&self) -> OnionResult<String> {
        schema::to_document(&self.state.data())
    }

    /// Read, parse and load the document at `path`.
    ///
    /// Rules are not checked; a document with dangling references loads and
    /// shows up in [`Self::validate`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from(
        &mut self,
        store: &dyn ConfigStore,
        path: &Path,
    ) -> OnionResult<Arc<Configuration>> {
        let contents = store.read(path)?;
        let config = schema::parse_configuration(&contents)?;
        let loaded = self.load(config);
        info!(nodes = loaded.node_count(), "Configuration loaded");
        Ok(loaded)
    }

    /// Write the current configuration to `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn save_to(&self, store: &dyn ConfigStore, path: &Path) -> OnionResult<()> {
        let contents = self.to_json()?;
        store.write(path, &contents)?;
        info!(revision = self.revision(), "Configuration saved");
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        let config = self.state.data();
        Summary {
            folder_path: config.folder_path.clone(),
            entities: config.entities.len(),
            domain_services: config.domain_services.len(),
            application_services: config.application_services.len(),
            edges: config.edge_count(),
            ui_framework: config.ui_framework.map(|f| f.to_string()),
            di_framework: config.di_framework.map(|f| f.to_string()),
            revision: self.state.revision(),
        }
    }
}
