//! The resolver chain.
//!
//! A [`DirResolver`] is moved through a sequence of source calls. The first
//! source whose candidate is an existing directory wins, and a platform
//! failure ends the chain with an error. Either outcome freezes the resolver:
//! every later call returns it unchanged.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::env::{ProcessEnv, SystemEnv};
use super::error::{ResolveError, SourceError};
use super::source::{DirSource, Resolution, join_base};

#[derive(Debug)]
enum State {
    Open,
    Found(Resolution),
    Failed(SourceError),
}

/// Chain builder that finds a default directory.
///
/// # Example
///
/// ```no_run
/// use defaultdir_core::DirResolver;
///
/// // Prefer $MYAPP_HOME, then <exe dir>/conf, then <cwd>/conf.
/// let dir = DirResolver::new()
///     .env_var("MYAPP_HOME")
///     .base("conf")
///     .executable_dir()
///     .working_dir()
///     .resolve()?;
/// println!("{}", dir.display());
/// # Ok::<(), defaultdir_core::ResolveError>(())
/// ```
#[derive(Debug)]
#[must_use = "a resolver does nothing until it is finalized with `resolve`"]
pub struct DirResolver<E = SystemEnv> {
    env: E,
    base: Option<PathBuf>,
    state: State,
}

impl DirResolver<SystemEnv> {
    /// Create an open resolver over the running process.
    pub const fn new() -> Self {
        Self::with_env(SystemEnv)
    }
}

impl Default for DirResolver<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ProcessEnv> DirResolver<E> {
    /// Create an open resolver over a custom process environment.
    pub const fn with_env(env: E) -> Self {
        Self {
            env,
            base: None,
            state: State::Open,
        }
    }

    /// Set the relative path appended to every later candidate root.
    pub fn base(mut self, base: impl Into<PathBuf>) -> Self {
        if !self.is_frozen() {
            self.base = Some(base.into());
        }
        self
    }

    /// Remove the base so later candidates are the bare roots.
    pub fn clear_base(mut self) -> Self {
        if !self.is_frozen() {
            self.base = None;
        }
        self
    }

    /// Try the current working directory.
    pub fn working_dir(self) -> Self {
        if self.is_frozen() {
            return self;
        }
        match self.env.current_dir() {
            Ok(root) => self.probe(&root, DirSource::WorkingDirectory),
            Err(e) => self.fail(SourceError::CurrentDir(e)),
        }
    }

    /// Try the directory that contains the running executable.
    pub fn executable_dir(self) -> Self {
        if self.is_frozen() {
            return self;
        }
        let exe = match self.env.current_exe() {
            Ok(exe) => exe,
            Err(e) => return self.fail(SourceError::Executable(e)),
        };
        let Some(root) = exe.parent().map(Path::to_path_buf) else {
            return self.fail(SourceError::NoExecutableParent(exe));
        };
        self.probe(&root, DirSource::ExecutableDirectory)
    }

    /// Try the directory named by environment variable `key`.
    ///
    /// An unset variable leaves the chain open. A set value is used as given,
    /// so an empty value makes the base relative to the working directory.
    pub fn env_var(self, key: &str) -> Self {
        if self.is_frozen() {
            return self;
        }
        let Some(value) = self.env.var_os(key) else {
            trace!(key, "environment variable not set");
            return self;
        };
        let root = PathBuf::from(value);
        self.probe(&root, DirSource::EnvironmentVariable(key.to_string()))
    }

    /// Whether a directory was found or a source failed.
    pub const fn is_frozen(&self) -> bool {
        !matches!(self.state, State::Open)
    }

    /// Finish the chain and return the found directory.
    pub fn resolve(self) -> Result<PathBuf, ResolveError> {
        self.resolution().map(|r| r.path)
    }

    /// Finish the chain and return the found directory with its source.
    pub fn resolution(self) -> Result<Resolution, ResolveError> {
        match self.state {
            State::Found(resolution) => Ok(resolution),
            State::Failed(err) => Err(ResolveError::Resolution(err)),
            State::Open => Err(ResolveError::NotFound),
        }
    }

    fn probe(mut self, root: &Path, source: DirSource) -> Self {
        let candidate = join_base(root, self.base.as_deref());
        if self.env.is_dir(&candidate) {
            debug!(path = %candidate.display(), %source, "found default directory");
            self.state = State::Found(Resolution {
                path: candidate,
                source,
            });
        } else {
            trace!(path = %candidate.display(), %source, "candidate is not a directory");
        }
        self
    }

    fn fail(mut self, err: SourceError) -> Self {
        debug!(error = %err, "directory source failed");
        self.state = State::Failed(err);
        self
    }
}
