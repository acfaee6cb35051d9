//! Repository naming convention.
//!
//! Repositories are never stored. An entity `User` implies the repository
//! `IUserRepository`, and that derived name is the only handle callers have
//! on it. Everything that needs to recognise or build such a name goes
//! through [`RepositoryNamingService`].

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{entities::Configuration, value_objects::Ring};

static REPOSITORY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^I([A-Z][A-Za-z0-9]*)Repository$").expect("repository pattern is valid")
});

/// Pure functions over the `I<Entity>Repository` convention.
pub struct RepositoryNamingService;

impl RepositoryNamingService {
    /// `true` iff `name` is `I`, an upper-case letter, any letters or digits,
    /// then `Repository`.
    pub fn is_repository_name(name: &str) -> bool {
        REPOSITORY_NAME.is_match(name)
    }

    /// The entity segment of a well-formed repository name.
    pub fn entity_of(name: &str) -> Option<&str> {
        REPOSITORY_NAME
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn repository_for(entity: &str) -> String {
        format!("I{entity}Repository")
    }

    /// Well-formed and backed by a member of `entities`.
    pub fn is_valid_repository<S: AsRef<str>>(name: &str, entities: &[S]) -> bool {
        Self::entity_of(name)
            .is_some_and(|entity| entities.iter().any(|e| e.as_ref() == entity))
    }

    /// One repository per entity, in entity order, duplicates kept.
    pub fn repositories<S: AsRef<str>>(entities: &[S]) -> Vec<String> {
        entities
            .iter()
            .map(|e| Self::repository_for(e.as_ref()))
            .collect()
    }

    /// Classify `node` by the collection that holds it.
    ///
    /// Entities win over domain services, which win over application
    /// services; a name found in none of them is a repository only if it is
    /// backed by an entity.
    pub fn ring(node: &str, config: &Configuration) -> Option<Ring> {
        if config.has_entity(node) {
            Some(Ring::Entities)
        } else if config.has_domain_service(node) {
            Some(Ring::DomainServices)
        } else if config.has_application_service(node) {
            Some(Ring::ApplicationServices)
        } else if Self::is_valid_repository(node, &config.entities) {
            Some(Ring::Repositories)
        } else {
            None
        }
    }
}
