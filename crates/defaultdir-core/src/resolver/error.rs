//! Resolver error types.
//!
//! Separates platform failures, which freeze a chain, from the ordinary
//! "nothing matched" outcome reported at finalization.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A platform-level failure while computing a candidate root.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Failed to locate the running executable.
    #[error("Cannot determine executable location: {0}")]
    Executable(#[source] io::Error),

    /// The executable path has no containing directory.
    #[error("Executable path {0} has no parent directory")]
    NoExecutableParent(PathBuf),
}

/// Errors returned when finalizing a [`DirResolver`](super::DirResolver).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A source hit a platform failure; no later source was evaluated.
    #[error("Directory resolution failed: {0}")]
    Resolution(#[from] SourceError),

    /// None of the attempted sources yielded an existing directory.
    #[error("No directory was found")]
    NotFound,
}

impl ResolveError {
    /// Whether this is the ordinary "nothing matched" outcome.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
