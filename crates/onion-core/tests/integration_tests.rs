//! Integration tests for onion-core.

use onion_core::{
    application::{ConfigState, ConnectionOutcome},
    domain::AppServiceDependencies,
    prelude::*,
};

fn user_domain() -> ConfigFacade {
    let mut facade = ConfigFacade::new();
    facade.add_entity("User");
    facade.add_entity("Product");
    facade.add_domain_service("UserService");
    facade.add_application_service("UserAppService");
    facade
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn repositories_follow_entity_order() {
    assert_eq!(
        RepositoryNamingService::repositories(&["User", "Product"]),
        vec!["IUserRepository", "IProductRepository"]
    );
}

#[test]
fn repository_names_need_the_i_prefix() {
    assert!(!RepositoryNamingService::is_repository_name("UserRepository"));
    assert!(RepositoryNamingService::is_repository_name("IUserRepository"));
    assert!(!RepositoryNamingService::is_valid_repository::<&str>(
        "IUserRepository",
        &[]
    ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn dangling_entity_reference_is_reported_with_both_names() {
    let mut config = Configuration::empty();
    config.entities = vec!["User".into()];
    config.domain_services = vec!["UserService".into()];
    config
        .domain_service_connections
        .insert("UserService".into(), vec!["NonExistentEntity".into()]);

    let report = ValidationService::validate_config_structure(&config);

    assert!(!report.valid);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("NonExistentEntity") && e.contains("UserService"))
    );
}

#[test]
fn malformed_repository_is_the_only_violation() {
    let mut config = Configuration::empty();
    config.entities = vec!["User".into()];
    config.domain_services = vec!["UserService".into()];
    config.application_services = vec!["UserAppService".into()];
    config.application_service_dependencies.insert(
        "UserAppService".into(),
        AppServiceDependencies {
            domain_services: vec!["UserService".into()],
            repositories: vec!["InvalidRepository".into()],
        },
    );

    let report = ValidationService::validate_config_structure(&config);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("InvalidRepository"));
    assert!(!report.errors[0].contains("does not exist in domainServices"));
}

#[test]
fn both_validators_agree() {
    let mut config = Configuration::empty();
    config.application_services = vec!["Checkout".into()];
    config.application_service_dependencies.insert(
        "Checkout".into(),
        AppServiceDependencies {
            domain_services: vec!["Ghost".into()],
            repositories: vec![],
        },
    );
    let json = serde_json::to_string(&config).unwrap();

    let report = ConfigFacade::validate_config_structure(&config);
    let gate = ConfigFacade::is_user_config_valid(&json).unwrap_err();

    assert!(!report.valid);
    assert!(matches!(gate, OnionError::Domain(ref e) if e.to_string() == report.errors[0]));
}

// ============================================================================
// Connections
// ============================================================================

#[test]
fn domain_service_may_use_entity_but_application_service_may_not() {
    let mut facade = user_domain();

    let ok: ConnectionOutcome = facade.add_connection("UserService", "User").into();
    assert!(ok.success);

    facade.add_entity("SomeEntity");
    let refused = facade
        .add_connection("UserAppService", "SomeEntity")
        .unwrap_err();
    assert!(matches!(refused, ConnectionError::IncompatibleRings { .. }));
}

#[test]
fn targets_track_connections() {
    let mut facade = user_domain();
    assert_eq!(
        facade.possible_targets("UserAppService"),
        vec!["UserService", "IUserRepository", "IProductRepository"]
    );

    facade
        .add_connection("UserAppService", "IUserRepository")
        .unwrap();

    assert_eq!(facade.current_targets("UserAppService"), vec!["IUserRepository"]);
    assert_eq!(
        facade.possible_targets("UserAppService"),
        vec!["UserService", "IProductRepository"]
    );
}

// ============================================================================
// State
// ============================================================================

#[test]
fn identity_updates_keep_data_equal() {
    let mut state = ConfigState::default();
    let before = (*state.data()).clone();

    state
        .update(|c| Ok::<_, std::convert::Infallible>(c.clone()))
        .unwrap();
    state
        .update(|c| Ok::<_, std::convert::Infallible>(c.clone()))
        .unwrap();

    assert_eq!(*state.data(), before);
}

#[test]
fn remove_node_is_idempotent() {
    let mut facade = user_domain();
    facade.add_connection("UserService", "User").unwrap();
    facade.add_connection("UserAppService", "UserService").unwrap();
    facade
        .add_connection("UserAppService", "IUserRepository")
        .unwrap();

    for name in ["User", "UserService", "UserAppService"] {
        let once = facade.remove_node(name);
        let twice = facade.remove_node(name);

        assert_eq!(once, twice);
        assert!(!twice.contains_node(name));
        assert!(twice.domain_service_connections.values().flatten().all(|e| e != name));
        assert!(
            twice
                .application_service_dependencies
                .values()
                .all(|d| d.targets().all(|t| t != name))
        );
    }
}

/// Drive the facade through a long deterministic sequence of edits and check
/// that every intermediate snapshot validates.
#[test]
fn edits_through_services_always_validate() {
    const NAMES: [&str; 6] = [
        "User",
        "Order",
        "UserService",
        "OrderService",
        "Checkout",
        "IOrderRepository",
    ];

    let mut facade = ConfigFacade::new();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for _ in 0..500 {
        let roll = next();
        let a = NAMES[(roll % 6) as usize];
        let b = NAMES[((roll >> 8) % 6) as usize];
        match (roll >> 16) % 6 {
            0 => {
                facade.add_entity(a);
            }
            1 => {
                facade.add_domain_service(a);
            }
            2 => {
                facade.add_application_service(a);
            }
            3 => {
                facade.remove_node(a);
            }
            4 => {
                let _ = facade.add_connection(a, b);
            }
            _ => {
                let _ = facade.remove_connection(a, b);
            }
        }

        let report = facade.validate();
        assert!(report.valid, "{:?}\n{:#?}", report.errors, facade.data());
    }
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn document_survives_save_and_load() {
    let mut facade = user_domain();
    facade.add_connection("UserService", "User").unwrap();
    let json = facade.to_json().unwrap();

    let mut reloaded = ConfigFacade::new();
    reloaded.load(ConfigFacade::map_file_to_config(&json).unwrap());

    assert_eq!(reloaded.data(), facade.data());
    assert!(ConfigFacade::validate_document(&json).valid);
}
