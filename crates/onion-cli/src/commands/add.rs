//! `onion add`: add an entity or service.

use tracing::{info, instrument};

use onion_core::{application::ConfigFacade, domain::Configuration};

use crate::{
    cli::{AddArgs, GlobalArgs, NodeKind},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
pub fn execute(
    args: AddArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let name = check_name(&args.name)?;
    let mut workspace = Workspace::open(global, config)?;

    if already_declared(&workspace.facade().data(), args.kind, name) {
        output.warning(&format!(
            "{} '{name}' already exists, nothing added",
            args.kind
        ))?;
        return output.json(&workspace.facade().summary());
    }

    let facade = workspace.facade_mut();
    match args.kind {
        NodeKind::Entity => facade.add_entity(name),
        NodeKind::DomainService => facade.add_domain_service(name),
        NodeKind::ApplicationService => facade.add_application_service(name),
    };
    workspace.save()?;
    info!("Node added");

    output.json(&workspace.facade().summary())?;
    output.success(&format!("Added {} '{name}'", args.kind))?;
    if args.kind == NodeKind::Entity {
        output.info(&format!(
            "Application services can now use {}",
            ConfigFacade::repository_for(name)
        ))?;
    }
    Ok(())
}

fn already_declared(config: &Configuration, kind: NodeKind, name: &str) -> bool {
    match kind {
        NodeKind::Entity => config.has_entity(name),
        NodeKind::DomainService => config.has_domain_service(name),
        NodeKind::ApplicationService => config.has_application_service(name),
    }
}

/// Node names must be non-empty and free of whitespace.
fn check_name(raw: &str) -> CliResult<&str> {
    let name = raw.trim();
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidInput {
            message: format!("'{raw}' is not a usable node name"),
            source: None,
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_names() {
        assert_eq!(check_name("  User ").unwrap(), "User");
    }

    #[test]
    fn rejects_blank_and_spaced_names() {
        assert!(check_name("   ").is_err());
        assert!(check_name("User Service").is_err());
    }

    #[test]
    fn duplicates_are_checked_per_collection() {
        let mut facade = ConfigFacade::new();
        facade.add_entity("User");
        let config = facade.data();

        assert!(already_declared(&config, NodeKind::Entity, "User"));
        assert!(!already_declared(&config, NodeKind::DomainService, "User"));
        assert!(!already_declared(&config, NodeKind::ApplicationService, "User"));
    }
}
