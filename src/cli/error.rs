//! CLI-level errors (wraps generation errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::GenError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Gen(#[from] GenError),

    #[error("cannot write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Gen(_) => crate::exitcode::DATAERR,
            CliError::WriteOutput { .. } => crate::exitcode::CANTCREAT,
        }
    }
}
