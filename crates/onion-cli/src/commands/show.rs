//! `onion show`: print the architecture ring by ring.

use onion_core::domain::Configuration;

use crate::{
    cli::GlobalArgs, commands::Workspace, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let architecture = workspace.facade().data();

    if output.is_json() {
        return output.json(&*architecture);
    }

    let summary = workspace.facade().summary();
    output.header(&format!("Architecture in {}", workspace.path().display()))?;
    if !summary.folder_path.is_empty() {
        output.item("Folder", Some(summary.folder_path.as_str()))?;
    }
    let frameworks = format!(
        "ui={} di={}",
        summary.ui_framework.as_deref().unwrap_or("-"),
        summary.di_framework.as_deref().unwrap_or("-")
    );
    output.item("Frameworks", Some(frameworks.as_str()))?;

    print_section(output, "Entities", &architecture.entities, |_| None)?;
    print_section(output, "Domain services", &architecture.domain_services, |name| {
        architecture
            .domain_service_connections
            .get(name)
            .filter(|targets| !targets.is_empty())
            .map(|targets| format!("-> {}", targets.join(", ")))
    })?;
    print_section(
        output,
        "Application services",
        &architecture.application_services,
        |name| dependencies_of(&architecture, name),
    )?;

    output.print("")?;
    output.info(&format!(
        "{} node(s), {} edge(s)",
        architecture.node_count(),
        summary.edges
    ))?;
    Ok(())
}

fn print_section<F>(output: &OutputManager, title: &str, names: &[String], detail: F) -> CliResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    output.print("")?;
    output.header(&format!("{title} ({})", names.len()))?;
    if names.is_empty() {
        output.print("  (none)")?;
    }
    for name in names {
        output.item(name, detail(name).as_deref())?;
    }
    Ok(())
}

fn dependencies_of(architecture: &Configuration, name: &str) -> Option<String> {
    let deps = architecture.application_service_dependencies.get(name)?;
    let targets: Vec<&str> = deps.targets().map(String::as_str).collect();
    if targets.is_empty() {
        None
    } else {
        Some(format!("-> {}", targets.join(", ")))
    }
}
