//! Helper directory ("exec path") resolution.
//!
//! Resolution order:
//! 1. Explicit override set on the context (e.g. `--exec-path=<dir>`)
//! 2. The exec-path environment variable (`RELAY_EXEC_PATH`), if non-empty
//! 3. The compiled-in default, passed through [`BootstrapContext::system_path`]
//!
//! Sources are never merged and nothing is cached here.

use std::ffi::OsString;

use serde::Serialize;
use tracing::trace;

use crate::context::BootstrapContext;
use crate::env::Environment;
use crate::error::BootstrapError;

/// How the exec path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecPathSource {
    /// Set explicitly on the context.
    Override,
    /// Taken from the environment.
    EnvVar,
    /// Compiled-in default.
    Default,
}

/// Resolution result for the exec path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecPathResolution {
    /// The helper directory. Environment values are kept byte-for-byte.
    pub path: OsString,
    /// How the path was determined.
    pub source: ExecPathSource,
}

impl BootstrapContext {
    /// Resolve the helper directory, reporting which source won.
    pub fn resolve_exec_path(
        &self,
        env: &dyn Environment,
    ) -> Result<ExecPathResolution, BootstrapError> {
        if let Some(path) = self.exec_path_override() {
            return Ok(ExecPathResolution {
                path: path.into(),
                source: ExecPathSource::Override,
            });
        }

        let key = &self.config().exec_path_env;
        if let Some(path) = env.var_os(key).filter(|v| !v.is_empty()) {
            trace!(key = key.as_str(), "exec path taken from environment");
            return Ok(ExecPathResolution {
                path,
                source: ExecPathSource::EnvVar,
            });
        }

        Ok(ExecPathResolution {
            path: self.system_path(&self.config().exec_path_default)?.into(),
            source: ExecPathSource::Default,
        })
    }

    /// The highest-priority location of helper programs.
    pub fn exec_path(&self, env: &dyn Environment) -> Result<OsString, BootstrapError> {
        self.resolve_exec_path(env).map(|resolution| resolution.path)
    }
}
