//! `onion connect` and `onion disconnect`.
//!
//! A refused edit is reported like any other error (exit 2 or 3). In JSON
//! mode the `{success, message, data}` outcome is printed first.

use std::sync::Arc;

use tracing::instrument;

use onion_core::{
    application::{ConnectionOutcome, ConfigFacade},
    domain::{Configuration, ConnectionError},
};

use crate::{
    cli::{EdgeArgs, GlobalArgs},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(source = %args.source, target = %args.target))]
pub fn connect(
    args: EdgeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    edit(args, global, config, output, ConfigFacade::add_connection, "Connected")
}

#[instrument(skip_all, fields(source = %args.source, target = %args.target))]
pub fn disconnect(
    args: EdgeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    edit(
        args,
        global,
        config,
        output,
        ConfigFacade::remove_connection,
        "Disconnected",
    )
}

type EdgeEdit = fn(&mut ConfigFacade, &str, &str) -> Result<Arc<Configuration>, ConnectionError>;

fn edit(
    args: EdgeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
    apply: EdgeEdit,
    verb: &str,
) -> CliResult<()> {
    let mut workspace = Workspace::open(global, config)?;

    let result = apply(workspace.facade_mut(), &args.source, &args.target);
    let refused = result.as_ref().err().cloned();
    output.json(&ConnectionOutcome::from(result))?;

    if let Some(err) = refused {
        return Err(err.into());
    }

    workspace.save()?;
    output.success(&format!("{verb} {} -> {}", args.source, args.target))?;
    Ok(())
}
