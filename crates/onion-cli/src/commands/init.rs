//! `onion init`: create an architecture document.

use tracing::{info, instrument};

use onion_adapters::Preset;
use onion_core::{
    application::ConfigFacade,
    domain::{DiFramework, UiFramework},
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write a blank or sample architecture to the selected document.
///
/// Frameworks come from the flags, then from a prompt on a terminal, then
/// from the settings.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let path = Workspace::document_path(global, config);
    let preset = match args.sample.as_deref() {
        Some(name) => name.parse::<Preset>()?,
        None => Preset::Blank,
    };

    let existing = Workspace::new(path.clone(), ConfigFacade::new());
    if existing.exists() && !args.force {
        return Err(CliError::DocumentExists { path });
    }

    let ui = match args.ui {
        Some(ui) => ui,
        None => prompt_ui(config.defaults.ui_framework, output)?,
    };
    let di = match args.di {
        Some(di) => di,
        None => prompt_di(config.defaults.di_framework, output)?,
    };
    let folder = args
        .folder
        .unwrap_or_else(|| config.defaults.folder_path.clone());

    let architecture = preset.build(ui, di, &folder)?;
    let workspace = Workspace::new(path, ConfigFacade::with_config(architecture));
    workspace.save()?;

    info!(preset = %preset, path = %workspace.path().display(), "Document created");

    if output.is_json() {
        return output.json(&workspace.facade().summary());
    }

    output.success(&format!(
        "Created {} ({})",
        workspace.path().display(),
        preset.description()
    ))?;
    output.item("UI framework", Some(ui.as_str()))?;
    output.item("DI framework", Some(di.as_str()))?;
    if !folder.is_empty() {
        output.item("Folder", Some(folder.as_str()))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt_ui(default: UiFramework, output: &OutputManager) -> CliResult<UiFramework> {
    if !output.is_interactive() {
        return Ok(default);
    }
    select("UI framework", &UiFramework::ALL, default)
}

#[cfg(feature = "interactive")]
fn prompt_di(default: DiFramework, output: &OutputManager) -> CliResult<DiFramework> {
    if !output.is_interactive() {
        return Ok(default);
    }
    select("DI framework", &DiFramework::ALL, default)
}

#[cfg(feature = "interactive")]
fn select<T>(prompt: &str, choices: &[T], default: T) -> CliResult<T>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let labels: Vec<String> = choices.iter().map(ToString::to_string).collect();
    let start = choices.iter().position(|c| *c == default).unwrap_or(0);

    let picked = dialoguer::Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(start)
        .interact_opt()
        .map_err(|e| CliError::InvalidInput {
            message: format!("could not read the {prompt} choice"),
            source: Some(Box::new(e)),
        })?;

    match picked {
        Some(index) => Ok(choices[index]),
        None => Err(CliError::Cancelled),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_ui(default: UiFramework, _output: &OutputManager) -> CliResult<UiFramework> {
    Ok(default)
}

#[cfg(not(feature = "interactive"))]
fn prompt_di(default: DiFramework, _output: &OutputManager) -> CliResult<DiFramework> {
    Ok(default)
}
