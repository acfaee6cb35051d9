use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DiFramework, UiFramework};

/// Dependencies of one application service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppServiceDependencies {
    pub domain_services: Vec<String>,
    pub repositories: Vec<String>,
}

impl AppServiceDependencies {
    pub fn is_empty(&self) -> bool {
        self.domain_services.is_empty() && self.repositories.is_empty()
    }

    /// Domain services first, then repositories.
    pub fn targets(&self) -> impl Iterator<Item = &String> {
        self.domain_services.iter().chain(self.repositories.iter())
    }
}

/// The architecture graph: nodes per ring plus the edges between them.
///
/// Collections keep insertion order and may hold duplicates; the edit model
/// is permissive and order matters to callers replaying edits. Edge maps are
/// the only source of truth for connections.
///
/// Snapshots are never edited in place once handed out. Every change goes
/// through [`crate::application::ConfigState::update`], which swaps in a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Target location for generated code. Opaque to the engine.
    #[serde(default)]
    pub folder_path: String,
    pub entities: Vec<String>,
    pub domain_services: Vec<String>,
    pub application_services: Vec<String>,
    pub domain_service_connections: BTreeMap<String, Vec<String>>,
    pub application_service_dependencies: BTreeMap<String, AppServiceDependencies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_framework: Option<UiFramework>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub di_framework: Option<DiFramework>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::empty()
    }
}

impl Configuration {
    /// A configuration with no nodes, no edges and default frameworks.
    pub fn empty() -> Self {
        Self {
            folder_path: String::new(),
            entities: Vec::new(),
            domain_services: Vec::new(),
            application_services: Vec::new(),
            domain_service_connections: BTreeMap::new(),
            application_service_dependencies: BTreeMap::new(),
            ui_framework: Some(UiFramework::default()),
            di_framework: Some(DiFramework::default()),
        }
    }

    pub fn with_folder_path(mut self, folder_path: impl Into<String>) -> Self {
        self.folder_path = folder_path.into();
        self
    }

    pub fn with_frameworks(mut self, ui: UiFramework, di: DiFramework) -> Self {
        self.ui_framework = Some(ui);
        self.di_framework = Some(di);
        self
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e == name)
    }

    pub fn has_domain_service(&self, name: &str) -> bool {
        self.domain_services.iter().any(|s| s == name)
    }

    pub fn has_application_service(&self, name: &str) -> bool {
        self.application_services.iter().any(|s| s == name)
    }

    /// Whether `name` is declared in any of the three node collections.
    pub fn contains_node(&self, name: &str) -> bool {
        self.has_entity(name) || self.has_domain_service(name) || self.has_application_service(name)
    }

    pub fn node_count(&self) -> usize {
        self.entities.len() + self.domain_services.len() + self.application_services.len()
    }

    /// Number of stored edges, counted per list entry.
    pub fn edge_count(&self) -> usize {
        let connections: usize = self.domain_service_connections.values().map(Vec::len).sum();
        let dependencies: usize = self
            .application_service_dependencies
            .values()
            .map(|d| d.domain_services.len() + d.repositories.len())
            .sum();
        connections + dependencies
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
            && self.domain_service_connections.is_empty()
            && self.application_service_dependencies.is_empty()
    }
}
