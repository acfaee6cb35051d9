//! Wire schema of the architecture document.
//!
//! The document is a JSON object shaped like [`Configuration`]. Two readers
//! live here:
//!
//! - [`parse_configuration`] is strict: it produces a typed model or fails on
//!   the first problem.
//! - [`document_violations`] is lenient: it walks a raw `serde_json::Value`,
//!   records every shape problem, treats malformed parts as empty and then
//!   runs the referential rules over what is left.

use serde_json::{Map, Value};

use crate::{
    application::ApplicationError,
    domain::{
        AppServiceDependencies, Configuration, DiFramework, DomainError, UiFramework,
        validation,
    },
    error::OnionResult,
};

pub const FOLDER_PATH: &str = "folderPath";
pub const ENTITIES: &str = "entities";
pub const DOMAIN_SERVICES: &str = "domainServices";
pub const APPLICATION_SERVICES: &str = "applicationServices";
pub const DOMAIN_SERVICE_CONNECTIONS: &str = "domainServiceConnections";
pub const APPLICATION_SERVICE_DEPENDENCIES: &str = "applicationServiceDependencies";
pub const UI_FRAMEWORK: &str = "uiFramework";
pub const DI_FRAMEWORK: &str = "diFramework";
pub const REPOSITORIES: &str = "repositories";

/// Deserialize a document into the typed model.
///
/// Syntax errors become [`ApplicationError::InvalidJson`]; well-formed JSON
/// of the wrong shape becomes [`ApplicationError::SchemaMismatch`].
pub fn parse_configuration(json: &str) -> OnionResult<Configuration> {
    serde_json::from_str(json).map_err(|e| ApplicationError::from_json(&e).into())
}

/// Serialize a configuration the way [`parse_configuration`] reads it.
pub fn to_document(config: &Configuration) -> OnionResult<String> {
    serde_json::to_string_pretty(config).map_err(|e| {
        crate::error::OnionError::Internal {
            message: format!("Failed to serialize configuration: {e}"),
        }
    })
}

/// Every violation in a raw document, shape problems first within each
/// section. Never fails.
pub fn document_violations(document: &Value) -> Vec<DomainError> {
    let Some(root) = document.as_object() else {
        return vec![DomainError::MalformedField {
            field: "<root>".into(),
            expected: "a JSON object",
        }];
    };

    let mut found = Vec::new();

    if let Some(folder) = root.get(FOLDER_PATH) {
        if !folder.is_string() {
            found.push(DomainError::MalformedField {
                field: FOLDER_PATH.into(),
                expected: "a string",
            });
        }
    }

    let mut config = Configuration {
        folder_path: String::new(),
        entities: string_list(root.get(ENTITIES), ENTITIES, &mut found),
        domain_services: string_list(root.get(DOMAIN_SERVICES), DOMAIN_SERVICES, &mut found),
        application_services: string_list(
            root.get(APPLICATION_SERVICES),
            APPLICATION_SERVICES,
            &mut found,
        ),
        domain_service_connections: Default::default(),
        application_service_dependencies: Default::default(),
        ui_framework: None,
        di_framework: None,
    };

    if let Some(connections) = object_field(root, DOMAIN_SERVICE_CONNECTIONS, &mut found) {
        for (service, entities) in connections {
            let field = format!("{DOMAIN_SERVICE_CONNECTIONS}.{service}");
            let entities = string_list(Some(entities), &field, &mut found);
            config
                .domain_service_connections
                .insert(service.clone(), entities);
        }
    }
    validation::check_domain_service_connections(&config, &mut found);

    if let Some(dependencies) = object_field(root, APPLICATION_SERVICE_DEPENDENCIES, &mut found) {
        for (service, deps) in dependencies {
            let field = format!("{APPLICATION_SERVICE_DEPENDENCIES}.{service}");
            let Some(deps) = deps.as_object() else {
                found.push(DomainError::MalformedField {
                    field,
                    expected: "an object with domainServices and repositories",
                });
                continue;
            };
            let parsed = AppServiceDependencies {
                domain_services: string_list(
                    deps.get(DOMAIN_SERVICES),
                    &format!("{field}.{DOMAIN_SERVICES}"),
                    &mut found,
                ),
                repositories: string_list(
                    deps.get(REPOSITORIES),
                    &format!("{field}.{REPOSITORIES}"),
                    &mut found,
                ),
            };
            config
                .application_service_dependencies
                .insert(service.clone(), parsed);
        }
    }
    validation::check_application_service_dependencies(&config, &mut found);

    check_framework::<UiFramework>(root.get(UI_FRAMEWORK), UI_FRAMEWORK, &mut found);
    check_framework::<DiFramework>(root.get(DI_FRAMEWORK), DI_FRAMEWORK, &mut found);

    found
}

fn string_list(value: Option<&Value>, field: &str, found: &mut Vec<DomainError>) -> Vec<String> {
    let Some(value) = value else {
        found.push(DomainError::MissingField {
            field: field.to_string(),
        });
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        found.push(DomainError::MalformedField {
            field: field.to_string(),
            expected: "an array of strings",
        });
        return Vec::new();
    };

    let mut names = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(name) => names.push(name.to_string()),
            None => found.push(DomainError::MalformedField {
                field: format!("{field}[{index}]"),
                expected: "a string",
            }),
        }
    }
    names
}

fn object_field<'v>(
    root: &'v Map<String, Value>,
    field: &str,
    found: &mut Vec<DomainError>,
) -> Option<&'v Map<String, Value>> {
    match root.get(field) {
        None => {
            found.push(DomainError::MissingField {
                field: field.to_string(),
            });
            None
        }
        Some(value) => {
            let object = value.as_object();
            if object.is_none() {
                found.push(DomainError::MalformedField {
                    field: field.to_string(),
                    expected: "an object",
                });
            }
            object
        }
    }
}

fn check_framework<F>(value: Option<&Value>, field: &'static str, found: &mut Vec<DomainError>)
where
    F: std::str::FromStr<Err = DomainError>,
{
    match value {
        None | Some(Value::Null) => found.push(DomainError::MissingFramework { field }),
        Some(Value::String(raw)) => {
            if let Err(err) = raw.parse::<F>() {
                found.push(err);
            }
        }
        Some(other) => found.push(DomainError::InvalidFramework {
            field,
            value: other.to_string(),
            allowed: match field {
                UI_FRAMEWORK => UiFramework::allowed(),
                _ => DiFramework::allowed(),
            },
        }),
    }
}
