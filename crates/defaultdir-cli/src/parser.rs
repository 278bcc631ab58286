//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::step::Step;

/// How the resolved directory is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key = value` lines.
    #[default]
    Pairs,
    /// Pretty-printed JSON object.
    Json,
    /// The bare path.
    PathOnly,
}

/// Resolve a default application directory from an ordered list of steps.
///
/// Steps run left to right; the first existing directory wins.
#[derive(Parser, Debug)]
#[command(name = "defaultdir")]
#[command(about = "Resolve a default application directory")]
#[command(version)]
pub struct Cli {
    /// Base path appended to each candidate until a `base:`/`clear-base` step
    #[arg(long, env = "DEFAULTDIR_BASE")]
    pub base: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "path_only")]
    pub json: bool,

    /// Print only the resolved path
    #[arg(long)]
    pub path_only: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Steps: cwd, exe, env:<KEY>, base:<PATH>, clear-base
    #[arg(value_name = "STEP", required = true)]
    pub steps: Vec<Step>,
}

impl Cli {
    /// Selected output format.
    pub const fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.path_only {
            OutputFormat::PathOnly
        } else {
            OutputFormat::Pairs
        }
    }
}
