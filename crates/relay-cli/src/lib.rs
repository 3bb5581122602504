//! The `relay` command.
//!
//! Parses arguments, bootstraps `PATH` through relay-core and dispatches to
//! built-in commands or `relay-<name>` helpers.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use bootstrap::{CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::{Cli, PathModeArg};
