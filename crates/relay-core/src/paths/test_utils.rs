//! Test utilities for tests that touch the real process environment.
//!
//! Most tests use [`MemoryEnvironment`](crate::MemoryEnvironment). Tests that
//! exercise [`ProcessEnvironment`](crate::ProcessEnvironment) or the working
//! directory must hold [`ENV_LOCK`] so they do not race each other.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on process-wide state.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// ```ignore
/// let _lock = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("RELAY_EXEC_PATH", "/tmp/helpers");
/// // original value restored when _env is dropped
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
