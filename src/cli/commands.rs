use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::build_instance_text;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::table::{self, WEB_AUDIO_NODES};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Generate { output }) => _generate(output.as_deref()),
        Some(Commands::List) => _list(),
        Some(Commands::Check) => _check(),
        None => _generate(None),
    }
}

#[instrument]
fn _generate(output: Option<&Path>) -> CliResult<()> {
    debug!("output: {:?}", output);
    let text = build_instance_text(WEB_AUDIO_NODES)?;
    match output {
        Some(path) => fs::write(path, &text).map_err(|source| CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?,
        None => print!("{}", text),
    }
    Ok(())
}

#[instrument]
fn _list() -> CliResult<()> {
    for spec in WEB_AUDIO_NODES {
        output::info(&format!("{} {}", spec.name, spec.arity));
    }
    Ok(())
}

#[instrument]
fn _check() -> CliResult<()> {
    match table::validate(WEB_AUDIO_NODES) {
        Ok(()) => {
            output::success(&format!("{} nodes, table OK", WEB_AUDIO_NODES.len()));
            Ok(())
        }
        Err(e) => {
            output::failure(&e);
            Err(e.into())
        }
    }
}
