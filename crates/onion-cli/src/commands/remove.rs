//! `onion remove`: delete a node and every edge that mentions it.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, RemoveArgs},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: RemoveArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut workspace = Workspace::open(global, config)?;

    let before = workspace.facade().data();
    if !before.contains_node(&args.name) {
        output.warning(&format!("'{}' is not in the architecture", args.name))?;
        return output.json(&workspace.facade().summary());
    }

    let after = workspace.facade_mut().remove_node(&args.name);
    workspace.save()?;

    let dropped = before.edge_count() - after.edge_count();
    info!(dropped, "Node removed");

    output.json(&workspace.facade().summary())?;
    output.success(&format!("Removed '{}'", args.name))?;
    if dropped > 0 {
        output.info(&format!("{dropped} edge(s) went with it"))?;
    }
    Ok(())
}
