//! Candidate sources and the resolution result.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Which source produced the resolved directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum DirSource {
    /// The process's current working directory.
    WorkingDirectory,
    /// The directory containing the running executable.
    ExecutableDirectory,
    /// The value of the named environment variable.
    EnvironmentVariable(String),
}

impl fmt::Display for DirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkingDirectory => f.write_str("working_directory"),
            Self::ExecutableDirectory => f.write_str("executable_directory"),
            Self::EnvironmentVariable(key) => write!(f, "env:{key}"),
        }
    }
}

/// A directory found by a resolver chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The directory that was found.
    pub path: PathBuf,
    /// How the directory was found.
    pub source: DirSource,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path = {}", self.path.display())?;
        write!(f, "source = {}", self.source)
    }
}

/// Append `base` to `root`.
///
/// `base` is always treated as a suffix: root and drive prefixes on it are
/// dropped so it cannot replace `root`. An empty base yields `root` unchanged.
pub(super) fn join_base(root: &Path, base: Option<&Path>) -> PathBuf {
    let Some(base) = base else {
        return root.to_path_buf();
    };

    let relative: PathBuf = base
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir | Component::CurDir))
        .collect();

    if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}
