//! Environment variable store.
//!
//! Resolution reads the environment and search-path setup writes `PATH`.
//! Both go through [`Environment`] so an embedder (or a test) can supply an
//! in-memory store instead of the process environment.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, PoisonError};

/// Read/write access to environment variables.
///
/// Values are `OsString`s: `PATH` and the exec-path variable may hold bytes
/// that are not valid Unicode and must pass through unchanged.
pub trait Environment {
    /// Raw value of `key`, or `None` if unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Set `key` to `value`, replacing any previous value.
    fn set_var(&self, key: &str, value: &OsStr);

    /// Value of `key`, or `None` if unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).and_then(|value| value.into_string().ok())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    /// Must only be called while the process is single-threaded, which holds
    /// for bootstrap running at the top of `main`.
    #[allow(unsafe_code)]
    fn set_var(&self, key: &str, value: &OsStr) {
        // SAFETY: bootstrap runs before any other thread is spawned.
        unsafe {
            env::set_var(key, value);
        }
    }
}

/// An environment held in memory.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: Mutex<HashMap<String, OsString>>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_var(self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.set_var(key, value.as_ref());
        self
    }

    /// Remove `key`, returning its previous value.
    pub fn remove_var(&self, key: &str) -> Option<OsString> {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

impl Environment for MemoryEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_var(&self, key: &str, value: &OsStr) {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_os_string());
    }
}
