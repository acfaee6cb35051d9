use crate::domain::{
    entities::Configuration, error::DomainError, naming::RepositoryNamingService,
};

/// A structural check that appends every violation it finds.
pub type Rule = fn(&Configuration, &mut Vec<DomainError>);

/// One named entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub name: &'static str,
    pub check: Rule,
}

/// Single source of truth for configuration invariants.
///
/// Both the aggregating report and the fail-fast gate walk this table in
/// order, so they always agree on what counts as a violation.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        name: "domain-service-connections",
        check: check_domain_service_connections,
    },
    RuleDef {
        name: "application-service-dependencies",
        check: check_application_service_dependencies,
    },
    RuleDef {
        name: "frameworks",
        check: check_frameworks,
    },
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Every violation, in rule-table order.
    pub fn violations(config: &Configuration) -> Vec<DomainError> {
        let mut found = Vec::new();
        for rule in RULES {
            (rule.check)(config, &mut found);
        }
        found
    }

    /// The first violation, if any.
    pub fn first_violation(config: &Configuration) -> Result<(), DomainError> {
        for rule in RULES {
            let mut found = Vec::new();
            (rule.check)(config, &mut found);
            if let Some(first) = found.into_iter().next() {
                tracing::debug!(rule = rule.name, "Rule failed");
                return Err(first);
            }
        }
        Ok(())
    }
}

/// Keys must be declared domain services; values must be declared entities.
pub fn check_domain_service_connections(config: &Configuration, found: &mut Vec<DomainError>) {
    for (service, entities) in &config.domain_service_connections {
        if !config.has_domain_service(service) {
            found.push(DomainError::UnknownDomainService {
                service: service.clone(),
            });
        }
        for entity in entities {
            if !config.has_entity(entity) {
                found.push(DomainError::UnknownEntity {
                    entity: entity.clone(),
                    service: service.clone(),
                });
            }
        }
    }
}

/// Keys must be declared application services; domain-service references
/// must be declared; repository references must be well-formed and backed by
/// an entity.
pub fn check_application_service_dependencies(
    config: &Configuration,
    found: &mut Vec<DomainError>,
) {
    for (service, deps) in &config.application_service_dependencies {
        if !config.has_application_service(service) {
            found.push(DomainError::UnknownApplicationService {
                service: service.clone(),
            });
        }
        for domain_service in &deps.domain_services {
            if !config.has_domain_service(domain_service) {
                found.push(DomainError::UnknownDomainServiceReference {
                    domain_service: domain_service.clone(),
                    service: service.clone(),
                });
            }
        }
        for repository in &deps.repositories {
            match RepositoryNamingService::entity_of(repository) {
                None => found.push(DomainError::InvalidRepositoryName {
                    repository: repository.clone(),
                    service: service.clone(),
                }),
                Some(entity) if !config.has_entity(entity) => {
                    found.push(DomainError::UnknownRepositoryEntity {
                        repository: repository.clone(),
                        entity: entity.to_string(),
                        service: service.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
}

/// Both framework fields must be set. Their values are typed, so a set
/// field is always a member of its enumeration.
pub fn check_frameworks(config: &Configuration, found: &mut Vec<DomainError>) {
    if config.ui_framework.is_none() {
        found.push(DomainError::MissingFramework {
            field: "uiFramework",
        });
    }
    if config.di_framework.is_none() {
        found.push(DomainError::MissingFramework {
            field: "diFramework",
        });
    }
}
