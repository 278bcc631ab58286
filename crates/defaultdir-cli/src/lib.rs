//! Command-line adapter for `defaultdir-core`.
//!
//! Runs a resolver chain written as a list of steps and prints the result.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod error;
pub mod parser;
pub mod run;
pub mod step;

pub use error::CliError;
pub use parser::{Cli, OutputFormat};
pub use run::{execute, render, resolve_steps};
pub use step::Step;
