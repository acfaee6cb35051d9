//! Connection Service - edges between rings.
//!
//! Edge rules come from [`Ring::allowed_targets`]:
//!
//! ```text
//! domain service       ──▶ entity
//! application service  ──▶ domain service
//! application service  ──▶ repository (I<Entity>Repository)
//! ```
//!
//! Read-only queries are free functions over a snapshot so that callers
//! holding only `&Configuration` can use them; edits go through
//! [`ConnectionService`] and therefore through [`ConfigState::update`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ConfigState,
    domain::{ConnectionError, Configuration, RepositoryNamingService, Ring},
};

/// Which edge list a connection lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// `domainServiceConnections[source]`
    DomainServiceToEntity,
    /// `applicationServiceDependencies[source].domainServices`
    ApplicationToDomainService,
    /// `applicationServiceDependencies[source].repositories`
    ApplicationToRepository,
}

impl EdgeKind {
    fn between(source: Ring, target: Ring) -> Option<Self> {
        match (source, target) {
            (Ring::DomainServices, Ring::Entities) => Some(Self::DomainServiceToEntity),
            (Ring::ApplicationServices, Ring::DomainServices) => {
                Some(Self::ApplicationToDomainService)
            }
            (Ring::ApplicationServices, Ring::Repositories) => Some(Self::ApplicationToRepository),
            _ => None,
        }
    }
}

/// Result record for callers that want `{success, message, data}` rather
/// than a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<Configuration>,
}

impl From<Result<Arc<Configuration>, ConnectionError>> for ConnectionOutcome {
    fn from(result: Result<Arc<Configuration>, ConnectionError>) -> Self {
        match result {
            Ok(config) => Self {
                success: true,
                message: None,
                data: Some(Configuration::clone(&config)),
            },
            Err(err) => Self {
                success: false,
                message: Some(err.to_string()),
                data: None,
            },
        }
    }
}

/// Creates and removes edges on the owned state.
pub struct ConnectionService<'a> {
    state: &'a mut ConfigState,
}

impl<'a> ConnectionService<'a> {
    pub fn new(state: &'a mut ConfigState) -> Self {
        Self { state }
    }

    /// Add `source → target` if the rings allow it and it does not exist yet.
    ///
    /// A refused edge leaves the state untouched.
    #[instrument(skip(self))]
    pub fn add_connection(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<Arc<Configuration>, ConnectionError> {
        let result = self.state.update(|current| -> Result<Configuration, ConnectionError> {
            let kind = check_connection(current, source, target)?;
            let mut next = current.clone();
            match kind {
                EdgeKind::DomainServiceToEntity => next
                    .domain_service_connections
                    .entry(source.to_string())
                    .or_default()
                    .push(target.to_string()),
                EdgeKind::ApplicationToDomainService => next
                    .application_service_dependencies
                    .entry(source.to_string())
                    .or_default()
                    .domain_services
                    .push(target.to_string()),
                EdgeKind::ApplicationToRepository => next
                    .application_service_dependencies
                    .entry(source.to_string())
                    .or_default()
                    .repositories
                    .push(target.to_string()),
            }
            Ok(next)
        });

        match &result {
            Ok(_) => debug!(source, target, "Connection added"),
            Err(err) => debug!(source, target, reason = %err, "Connection refused"),
        }
        result
    }

    /// Remove every `source → target` edge.
    #[instrument(skip(self))]
    pub fn remove_connection(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<Arc<Configuration>, ConnectionError> {
        self.state.update(|current| {
            if !has_connection(current, source, target) {
                return Err(ConnectionError::NotFound {
                    source_node: source.to_string(),
                    target: target.to_string(),
                });
            }

            let mut next = current.clone();
            if let Some(entities) = next.domain_service_connections.get_mut(source) {
                entities.retain(|e| e != target);
            }
            if let Some(deps) = next.application_service_dependencies.get_mut(source) {
                deps.domain_services.retain(|s| s != target);
                deps.repositories.retain(|r| r != target);
            }
            Ok(next)
        })
    }

    pub fn has_connection(&self, source: &str, target: &str) -> bool {
        has_connection(&self.state.data(), source, target)
    }

    pub fn possible_targets(&self, source: &str) -> Vec<String> {
        possible_targets(&self.state.data(), source)
    }

    pub fn current_targets(&self, source: &str) -> Vec<String> {
        current_targets(&self.state.data(), source)
    }

    pub fn validate_connection(&self, source: &str, target: &str) -> bool {
        validate_connection(&self.state.data(), source, target)
    }
}

/// The check [`ConnectionService::add_connection`] performs, as a `Result`.
pub fn check_connection(
    config: &Configuration,
    source: &str,
    target: &str,
) -> Result<EdgeKind, ConnectionError> {
    let source_ring = RepositoryNamingService::ring(source, config).ok_or_else(|| {
        ConnectionError::UnknownSource {
            source_node: source.to_string(),
        }
    })?;
    let target_ring = RepositoryNamingService::ring(target, config).ok_or_else(|| {
        ConnectionError::UnknownTarget {
            target: target.to_string(),
        }
    })?;

    if source == target {
        return Err(ConnectionError::SelfConnection {
            node: source.to_string(),
        });
    }

    let kind = source_ring
        .may_connect_to(target_ring)
        .then(|| EdgeKind::between(source_ring, target_ring))
        .flatten()
        .ok_or_else(|| ConnectionError::IncompatibleRings {
            source_node: source.to_string(),
            source_ring,
            target: target.to_string(),
            target_ring,
        })?;

    if has_connection(config, source, target) {
        return Err(ConnectionError::AlreadyConnected {
            source_node: source.to_string(),
            target: target.to_string(),
        });
    }

    Ok(kind)
}

/// Pure predicate form of [`check_connection`].
pub fn validate_connection(config: &Configuration, source: &str, target: &str) -> bool {
    check_connection(config, source, target).is_ok()
}

/// Membership test against the stored edge lists of `source`.
pub fn has_connection(config: &Configuration, source: &str, target: &str) -> bool {
    let in_connections = config
        .domain_service_connections
        .get(source)
        .is_some_and(|entities| entities.iter().any(|e| e == target));
    let in_dependencies = config
        .application_service_dependencies
        .get(source)
        .is_some_and(|deps| deps.targets().any(|t| t == target));
    in_connections || in_dependencies
}

/// Nodes `source` is currently connected to, in stored order.
pub fn current_targets(config: &Configuration, source: &str) -> Vec<String> {
    match RepositoryNamingService::ring(source, config) {
        Some(Ring::DomainServices) => config
            .domain_service_connections
            .get(source)
            .cloned()
            .unwrap_or_default(),
        Some(Ring::ApplicationServices) => config
            .application_service_dependencies
            .get(source)
            .map(|deps| deps.targets().cloned().collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Nodes `source` may still connect to: every candidate in an allowed ring,
/// without duplicates, minus the ones already connected.
pub fn possible_targets(config: &Configuration, source: &str) -> Vec<String> {
    let Some(ring) = RepositoryNamingService::ring(source, config) else {
        return Vec::new();
    };

    let mut candidates: Vec<String> = Vec::new();
    for target_ring in ring.allowed_targets() {
        let names = match target_ring {
            Ring::Entities => config.entities.clone(),
            Ring::DomainServices => config.domain_services.clone(),
            Ring::Repositories => RepositoryNamingService::repositories(&config.entities),
            Ring::ApplicationServices => config.application_services.clone(),
        };
        for name in names {
            if name != source
                && !candidates.contains(&name)
                && RepositoryNamingService::ring(&name, config) == Some(*target_ring)
                && !has_connection(config, source, &name)
            {
                candidates.push(name);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::NodeLifecycleService;

    fn seeded() -> ConfigState {
        let mut state = ConfigState::default();
        let mut lifecycle = NodeLifecycleService::new(&mut state);
        lifecycle.add_entity("User");
        lifecycle.add_entity("Product");
        lifecycle.add_domain_service("UserService");
        lifecycle.add_domain_service("CatalogService");
        lifecycle.add_application_service("UserAppService");
        state
    }

    #[test]
    fn domain_service_connects_to_entity() {
        let mut state = seeded();
        let config = ConnectionService::new(&mut state)
            .add_connection("UserService", "User")
            .unwrap();

        assert_eq!(config.domain_service_connections["UserService"], vec!["User"]);
    }

    #[test]
    fn application_service_connects_to_domain_service_and_repository() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);

        connections
            .add_connection("UserAppService", "UserService")
            .unwrap();
        let config = connections
            .add_connection("UserAppService", "IUserRepository")
            .unwrap();

        let deps = &config.application_service_dependencies["UserAppService"];
        assert_eq!(deps.domain_services, vec!["UserService"]);
        assert_eq!(deps.repositories, vec!["IUserRepository"]);
    }

    #[test]
    fn application_service_cannot_reach_entities() {
        let mut state = seeded();
        let revision = state.revision();

        let err = ConnectionService::new(&mut state)
            .add_connection("UserAppService", "User")
            .unwrap_err();

        assert!(matches!(err, ConnectionError::IncompatibleRings { .. }));
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn inner_rings_cannot_point_outwards() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);

        assert!(!connections.validate_connection("User", "UserService"));
        assert!(!connections.validate_connection("UserService", "UserAppService"));
        assert!(!connections.validate_connection("UserService", "IUserRepository"));
        assert!(!connections.validate_connection("IUserRepository", "User"));
        assert!(connections.add_connection("UserService", "CatalogService").is_err());
    }

    #[test]
    fn unknown_nodes_are_refused() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);

        assert!(matches!(
            connections.add_connection("Ghost", "User"),
            Err(ConnectionError::UnknownSource { .. })
        ));
        assert!(matches!(
            connections.add_connection("UserAppService", "IOrderRepository"),
            Err(ConnectionError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn duplicate_edge_is_refused() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);

        connections.add_connection("UserService", "User").unwrap();
        let err = connections.add_connection("UserService", "User").unwrap_err();

        assert!(matches!(err, ConnectionError::AlreadyConnected { .. }));
        assert!(!connections.validate_connection("UserService", "User"));
    }

    #[test]
    fn remove_connection_round_trip() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);
        connections.add_connection("UserService", "User").unwrap();

        let config = connections.remove_connection("UserService", "User").unwrap();
        assert!(config.domain_service_connections["UserService"].is_empty());
        assert!(!connections.has_connection("UserService", "User"));

        let err = connections
            .remove_connection("UserService", "User")
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn possible_targets_exclude_connected_nodes() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);
        connections.add_connection("UserService", "User").unwrap();
        connections
            .add_connection("UserAppService", "IProductRepository")
            .unwrap();

        assert_eq!(connections.possible_targets("UserService"), vec!["Product"]);
        assert_eq!(
            connections.possible_targets("UserAppService"),
            vec!["UserService", "CatalogService", "IUserRepository"]
        );
        assert!(connections.possible_targets("User").is_empty());
        assert!(connections.possible_targets("Ghost").is_empty());
    }

    #[test]
    fn possible_targets_are_deduplicated() {
        let mut state = seeded();
        NodeLifecycleService::new(&mut state).add_entity("User");

        let connections = ConnectionService::new(&mut state);
        assert_eq!(
            connections.possible_targets("UserService"),
            vec!["User", "Product"]
        );
    }

    #[test]
    fn current_targets_list_domain_services_before_repositories() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);
        connections
            .add_connection("UserAppService", "IUserRepository")
            .unwrap();
        connections
            .add_connection("UserAppService", "UserService")
            .unwrap();

        assert_eq!(
            connections.current_targets("UserAppService"),
            vec!["UserService", "IUserRepository"]
        );
        assert!(connections.current_targets("User").is_empty());
    }

    #[test]
    fn outcome_record_mirrors_result() {
        let mut state = seeded();
        let mut connections = ConnectionService::new(&mut state);

        let ok = ConnectionOutcome::from(connections.add_connection("UserService", "User"));
        assert!(ok.success);
        assert!(ok.message.is_none());
        assert!(ok.data.is_some());

        let refused =
            ConnectionOutcome::from(connections.add_connection("UserAppService", "User"));
        assert!(!refused.success);
        assert!(refused.data.is_none());
        assert!(refused.message.unwrap().contains("cannot connect"));
    }
}
