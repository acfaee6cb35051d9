//! `onion targets`: what a node may connect to, or already does.

use serde::Serialize;

use onion_core::domain::ConnectionError;

use crate::{
    cli::{GlobalArgs, TargetsArgs},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct Targets<'a> {
    source: &'a str,
    current: bool,
    targets: &'a [String],
}

pub fn execute(
    args: TargetsArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let facade = workspace.facade();

    if !facade.data().contains_node(&args.source) {
        return Err(ConnectionError::UnknownSource {
            source_node: args.source,
        }
        .into());
    }

    let targets = if args.current {
        facade.current_targets(&args.source)
    } else {
        facade.possible_targets(&args.source)
    };

    output.json(&Targets {
        source: &args.source,
        current: args.current,
        targets: &targets,
    })?;

    let what = if args.current { "Connected to" } else { "May connect to" };
    if targets.is_empty() {
        output.info(&format!("{what}: nothing"))?;
        return Ok(());
    }
    output.header(&format!("{what} ({}):", targets.len()))?;
    for target in &targets {
        output.item(target, None)?;
    }
    Ok(())
}
