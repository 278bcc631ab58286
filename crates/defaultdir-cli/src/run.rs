//! Runs a parsed command line against a resolver.

use std::path::Path;

use defaultdir_core::{DirResolver, ProcessEnv, Resolution};
use tracing::debug;

use crate::error::CliError;
use crate::parser::{Cli, OutputFormat};
use crate::step::Step;

/// Apply `base` and then each step to `resolver`, and finalize it.
pub fn resolve_steps<E: ProcessEnv>(
    resolver: DirResolver<E>,
    base: Option<&Path>,
    steps: &[Step],
) -> Result<Resolution, CliError> {
    let resolver = match base {
        Some(base) => resolver.base(base),
        None => resolver,
    };

    let resolver = steps.iter().fold(resolver, |resolver, step| {
        debug!(%step, frozen = resolver.is_frozen(), "applying step");
        step.apply(resolver)
    });

    Ok(resolver.resolution()?)
}

/// Format a resolution for printing.
pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Pairs => Ok(resolution.to_string()),
        OutputFormat::PathOnly => Ok(resolution.path.display().to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(resolution)
            .map_err(|e| CliError::Output(e.to_string())),
    }
}

/// Execute the command line against the running process.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let resolution = resolve_steps(DirResolver::new(), cli.base.as_deref(), &cli.steps)?;
    render(&resolution, cli.format())
}
