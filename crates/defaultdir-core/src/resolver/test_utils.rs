//! Helpers for resolver tests that read the real process environment.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

/// Held by every test that sets or removes a variable the resolver reads.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Puts one environment variable back the way it was when dropped.
///
/// The previous value is kept as an `OsString`, so non-UTF-8 values survive.
pub struct EnvVarGuard {
    key: OsString,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    /// Set `key` to `value` for the lifetime of the guard.
    pub fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        Self::replace(key, Some(value.as_ref()))
    }

    /// Remove `key` for the lifetime of the guard.
    pub fn unset(key: &str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &str, value: Option<&OsStr>) -> Self {
        let guard = Self {
            key: OsString::from(key),
            previous: env::var_os(key),
        };
        write_var(&guard.key, value);
        guard
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

#[allow(unsafe_code)]
fn write_var(key: &OsStr, value: Option<&OsStr>) {
    // Callers hold ENV_LOCK, so no other test thread reads the environment.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn guard_restores_non_utf8_value() {
        const KEY: &str = "DEFAULTDIR_TEST_GUARD";
        let _lock = ENV_LOCK.lock().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9");
        let _outer = EnvVarGuard::set(KEY, raw);

        {
            let _inner = EnvVarGuard::unset(KEY);
            assert!(env::var_os(KEY).is_none());
        }

        assert_eq!(env::var_os(KEY).as_deref(), Some(raw));
    }
}
