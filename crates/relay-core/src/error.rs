//! Bootstrap error types.
//!
//! Relocation that finds no matching reference path is deliberately absent:
//! it is logged and the requested path is used unchanged.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving paths or launching programs.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Relocation was requested before the invocation directory was known.
    #[error("Relocation requested for '{path}', but the invocation directory is unknown")]
    InvocationDirUnknown { path: String },

    /// Relocation needs an absolute invocation directory.
    #[error("Relocation requested for '{path}', but invocation directory '{dir}' is not absolute")]
    InvocationDirRelative { path: String, dir: String },

    /// The exec path override may only be set once.
    #[error("Exec path override already set to '{current}'")]
    ExecPathAlreadySet { current: String },

    /// Too many arguments for a bounded launch.
    #[error("too many args to run {program} (limit is {max})")]
    TooManyArgs { program: String, max: usize },

    /// The OS refused to start the program.
    #[error("Failed to exec '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(String),
}

impl BootstrapError {
    /// True when the launch failed because the program does not exist on `PATH`.
    pub fn is_program_not_found(&self) -> bool {
        matches!(
            self,
            Self::LaunchFailed { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
