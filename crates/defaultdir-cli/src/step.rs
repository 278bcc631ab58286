//! Resolver steps written on the command line.
//!
//! Each step maps to one chained [`DirResolver`] call:
//!
//! | Step           | Call                        |
//! |----------------|-----------------------------|
//! | `cwd`          | `working_dir()`             |
//! | `exe`          | `executable_dir()`          |
//! | `env:<KEY>`    | `env_var(KEY)`              |
//! | `base:<PATH>`  | `base(PATH)`                |
//! | `clear-base`   | `clear_base()`              |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use defaultdir_core::{DirResolver, ProcessEnv};

use crate::error::CliError;

/// One chained resolver operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `cwd`: try the current working directory.
    WorkingDir,
    /// `exe`: try the directory containing the executable.
    ExecutableDir,
    /// `env:<KEY>`: try the value of an environment variable.
    EnvVar(String),
    /// `base:<PATH>`: set the base for later steps.
    Base(PathBuf),
    /// `clear-base`: drop the base.
    ClearBase,
}

impl Step {
    /// Apply this step to a resolver.
    pub fn apply<E: ProcessEnv>(&self, resolver: DirResolver<E>) -> DirResolver<E> {
        match self {
            Self::WorkingDir => resolver.working_dir(),
            Self::ExecutableDir => resolver.executable_dir(),
            Self::EnvVar(key) => resolver.env_var(key),
            Self::Base(path) => resolver.base(path),
            Self::ClearBase => resolver.clear_base(),
        }
    }
}

impl FromStr for Step {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cwd" => return Ok(Self::WorkingDir),
            "exe" => return Ok(Self::ExecutableDir),
            "clear-base" => return Ok(Self::ClearBase),
            _ => {}
        }

        if let Some(key) = s.strip_prefix("env:") {
            if key.is_empty() {
                return Err(CliError::Arguments("env step needs a variable name".into()));
            }
            return Ok(Self::EnvVar(key.to_string()));
        }

        if let Some(path) = s.strip_prefix("base:") {
            if path.is_empty() {
                return Err(CliError::Arguments("base step needs a path".into()));
            }
            return Ok(Self::Base(PathBuf::from(path)));
        }

        Err(CliError::Arguments(format!(
            "unknown step '{s}' (expected cwd, exe, env:<KEY>, base:<PATH>, or clear-base)"
        )))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkingDir => f.write_str("cwd"),
            Self::ExecutableDir => f.write_str("exe"),
            Self::EnvVar(key) => write!(f, "env:{key}"),
            Self::Base(path) => write!(f, "base:{}", path.display()),
            Self::ClearBase => f.write_str("clear-base"),
        }
    }
}
