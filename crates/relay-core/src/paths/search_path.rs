//! `PATH` construction.
//!
//! The new value is built from scratch on every call:
//! `<exec path>:<invocation dir>:<existing PATH or fallback>`.
//! Relative directories are made absolute against the working directory and
//! empty ones are skipped.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use super::util::{PATH_LIST_SEPARATOR, make_absolute};
use crate::context::BootstrapContext;
use crate::env::Environment;
use crate::error::BootstrapError;

/// Used in place of the inherited `PATH` when none is set.
pub const FALLBACK_SEARCH_PATH: &str = "/usr/local/bin:/usr/bin:/bin";

fn push_dir(out: &mut OsString, dir: &OsStr) -> Result<(), BootstrapError> {
    if dir.is_empty() {
        return Ok(());
    }
    out.push(make_absolute(dir)?);
    out.push(PATH_LIST_SEPARATOR.encode_utf8(&mut [0; 4]));
    Ok(())
}

impl BootstrapContext {
    /// Compute the `PATH` value without touching the environment.
    ///
    /// An existing `PATH` is appended byte-for-byte, even when it is not
    /// valid Unicode.
    pub fn build_search_path(&self, env: &dyn Environment) -> Result<OsString, BootstrapError> {
        let mut path = OsString::new();

        push_dir(&mut path, &self.exec_path(env)?)?;
        if let Some(dir) = self.invocation_dir() {
            push_dir(&mut path, OsStr::new(dir))?;
        }

        match env.var_os("PATH") {
            Some(existing) => path.push(existing),
            None => path.push(FALLBACK_SEARCH_PATH),
        }

        Ok(path)
    }

    /// Build the `PATH` value and commit it, replacing the previous one.
    ///
    /// Returns the committed value. Capture the old `PATH` first if it is
    /// still needed.
    pub fn setup_path(&self, env: &dyn Environment) -> Result<OsString, BootstrapError> {
        let path = self.build_search_path(env)?;
        debug!(path = %Path::new(&path).display(), "configured search path");
        env.set_var("PATH", &path);
        Ok(path)
    }
}
