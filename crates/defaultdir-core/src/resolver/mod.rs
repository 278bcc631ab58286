//! Default directory resolution.
//!
//! A [`DirResolver`] tries candidate roots in the order the caller chains
//! them:
//! - the current working directory
//! - the directory containing the running executable
//! - the value of an environment variable
//!
//! Each root is optionally joined with a relative base before checking that
//! it is an existing directory.
//!
//! # Design
//!
//! - The first existing directory wins; later calls are no-ops
//! - Platform failures end the chain with [`ResolveError::Resolution`]
//! - Nothing is created, cached, or logged at error level
//! - Process lookups go through [`ProcessEnv`] so the chain is testable

mod chain;
mod env;
mod error;
mod source;

#[cfg(test)]
mod test_utils;

// Chain builder
pub use chain::DirResolver;

// Error types
pub use error::{ResolveError, SourceError};

// Process environment port
pub use env::{ProcessEnv, SystemEnv};

// Result types
pub use source::{DirSource, Resolution};
