//! CLI-specific error types and mappings.
//!
//! Maps resolver outcomes to exit codes and user-facing messages.

use defaultdir_core::ResolveError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No step found an existing directory.
    #[error("No directory was found")]
    NotFound,

    /// A source hit a platform failure.
    #[error("{0}")]
    Resolution(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Failed to render the result.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (including "not found")
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 71: `EX_OSERR`, the platform could not report a candidate root
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound | Self::Output(_) => 1,
            Self::Arguments(_) => 2,   // EX_USAGE
            Self::Resolution(_) => 71, // EX_OSERR
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => Self::NotFound,
            ResolveError::Resolution(source) => Self::Resolution(source.to_string()),
        }
    }
}
