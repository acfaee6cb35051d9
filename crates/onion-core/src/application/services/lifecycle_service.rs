//! Node Lifecycle Service - add and remove nodes.
//!
//! Removal cascades: every edge that mentions the removed node is dropped in
//! the same update, so no snapshot ever holds a dangling reference created by
//! this service.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ConfigState,
    domain::{Configuration, RepositoryNamingService},
};

/// Adds and removes entities, domain services and application services.
pub struct NodeLifecycleService<'a> {
    state: &'a mut ConfigState,
}

impl<'a> NodeLifecycleService<'a> {
    pub fn new(state: &'a mut ConfigState) -> Self {
        Self { state }
    }

    /// Append an entity. Duplicates are kept.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_entity(&mut self, name: impl AsRef<str>) -> Arc<Configuration> {
        let name = name.as_ref();
        self.state.apply(|current| {
            let mut next = current.clone();
            next.entities.push(name.to_string());
            next
        })
    }

    /// Append a domain service and give it an empty connection list.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_domain_service(&mut self, name: impl AsRef<str>) -> Arc<Configuration> {
        let name = name.as_ref();
        self.state.apply(|current| {
            let mut next = current.clone();
            next.domain_services.push(name.to_string());
            next.domain_service_connections
                .entry(name.to_string())
                .or_default();
            next
        })
    }

    /// Append an application service and give it empty dependency lists.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_application_service(&mut self, name: impl AsRef<str>) -> Arc<Configuration> {
        let name = name.as_ref();
        self.state.apply(|current| {
            let mut next = current.clone();
            next.application_services.push(name.to_string());
            next.application_service_dependencies
                .entry(name.to_string())
                .or_default();
            next
        })
    }

    /// Remove every occurrence of `name` and every edge that mentions it.
    ///
    /// Removing an unknown name is a no-op and returns the current snapshot.
    #[instrument(skip(self))]
    pub fn remove_node(&mut self, name: &str) -> Arc<Configuration> {
        self.state.apply(|current| remove_from(current, name))
    }
}

fn remove_from(current: &Configuration, name: &str) -> Configuration {
    let was_entity = current.has_entity(name);
    let was_domain_service = current.has_domain_service(name);
    let was_application_service = current.has_application_service(name);

    let mut next = current.clone();
    if !(was_entity || was_domain_service || was_application_service) {
        debug!(name, "Nothing to remove");
        return next;
    }

    next.entities.retain(|n| n != name);
    next.domain_services.retain(|n| n != name);
    next.application_services.retain(|n| n != name);

    // Loaded documents may carry dangling edges; sweep every list.
    for entities in next.domain_service_connections.values_mut() {
        entities.retain(|e| e != name);
    }
    for deps in next.application_service_dependencies.values_mut() {
        deps.domain_services.retain(|s| s != name);
        deps.repositories
            .retain(|r| RepositoryNamingService::entity_of(r) != Some(name));
    }

    if was_domain_service {
        next.domain_service_connections.remove(name);
    }

    if was_application_service {
        next.application_service_dependencies.remove(name);
    }

    debug!(
        name,
        was_entity, was_domain_service, was_application_service, "Node removed"
    );
    next
}
