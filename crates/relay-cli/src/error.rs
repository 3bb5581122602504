//! CLI-specific error types and mappings.
//!
//! Maps [`BootstrapError`] onto user-facing messages and sysexits-style exit
//! codes.

use relay_core::BootstrapError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No built-in command and no `relay-<name>` helper on `PATH`.
    #[error("'{0}' is not a relay command. See 'relay --help'.")]
    UnknownCommand(String),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Bootstrap configuration cannot support the requested resolution.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A helper was found but could not be started.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: General error (unknown command)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: see sysexits.h
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<BootstrapError> for CliError {
    fn from(err: BootstrapError) -> Self {
        match err {
            BootstrapError::InvocationDirUnknown { .. }
            | BootstrapError::InvocationDirRelative { .. }
            | BootstrapError::ExecPathAlreadySet { .. } => Self::Config(err.to_string()),
            BootstrapError::TooManyArgs { .. } => Self::Arguments(err.to_string()),
            BootstrapError::LaunchFailed { .. } => Self::Process(err.to_string()),
            BootstrapError::CurrentDir(msg) => Self::Io(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
