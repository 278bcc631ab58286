//! Process environment port.
//!
//! The resolver reads four pieces of process state. Routing them through
//! [`ProcessEnv`] keeps the chain logic independent of the running process so
//! platform failures can be exercised in tests.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Port for the process lookups performed by [`DirResolver`](super::DirResolver).
#[cfg_attr(test, mockall::automock)]
pub trait ProcessEnv {
    /// The process's current working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Absolute path of the running executable.
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// Look up an environment variable. `None` when unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Whether `path` exists and is a directory.
    ///
    /// Any metadata error (missing path, permission denied, dangling symlink)
    /// counts as "not a directory".
    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_dir())
    }
}

/// [`ProcessEnv`] backed by the real process and filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}
