//! Application-wide error types using thiserror.

use mocatalog_common::MoError;

/// Command line error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration or catalog error.
    #[error(transparent)]
    Mo(#[from] MoError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
