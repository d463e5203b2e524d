//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a manifest nor the full set of input files was given.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Unrecognised instrument kind filter.
    #[error("Unknown instrument kind: '{0}'. Use one of FIX, FRA, OIS, IRS, BAS.")]
    UnknownKind(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
