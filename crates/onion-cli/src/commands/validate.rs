//! `onion validate`: check the document against every rule.
//!
//! Works on the raw document so that problems the typed model cannot hold
//! (a misspelled framework, a list where a map belongs) are still reported.

use tracing::{debug, instrument};

use onion_core::application::{ConfigFacade, ValidationReport};

use crate::{
    cli::{GlobalArgs, ValidateArgs},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(fail_fast = args.fail_fast))]
pub fn execute(
    args: ValidateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let (path, contents) = Workspace::read_raw(global, config)?;

    if args.fail_fast {
        return match ConfigFacade::is_user_config_valid(&contents) {
            Ok(_) => {
                output.json(&ValidationReport::from_violations(&[]))?;
                output.success(&format!("{} is valid", path.display()))?;
                Ok(())
            }
            Err(e) => {
                output.json(&ValidationReport::rejected(e.to_string()))?;
                Err(e.into())
            }
        };
    }

    let report = ConfigFacade::validate_document(&contents);
    debug!(problems = report.errors.len(), "Document checked");
    output.json(&report)?;

    if report.valid {
        output.success(&format!("{} is valid", path.display()))?;
        return Ok(());
    }

    output.error(&format!(
        "{} has {} problem(s):",
        path.display(),
        report.errors.len()
    ))?;
    for problem in &report.errors {
        output.item(problem, None)?;
    }
    Err(CliError::InvalidArchitecture {
        path,
        count: report.errors.len(),
    })
}
