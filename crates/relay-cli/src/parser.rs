//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::{Parser, ValueEnum};
use relay_core::PathResolutionMode;

use crate::commands::Commands;

/// How compiled-in paths are interpreted at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathModeArg {
    /// Use compiled-in paths as they are
    Fixed,
    /// Resolve compiled-in paths against the install prefix
    Relocatable,
}

impl From<PathModeArg> for PathResolutionMode {
    fn from(arg: PathModeArg) -> Self {
        match arg {
            PathModeArg::Fixed => Self::Fixed,
            PathModeArg::Relocatable => Self::Relocatable,
        }
    }
}

/// Command-line interface for the relay command suite.
///
/// Built-in commands are handled here; anything else is forwarded to a
/// `relay-<name>` helper found through `PATH`.
#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Run relay commands and relay-* helpers")]
#[command(version)]
pub struct Cli {
    /// Print the helper directory, or set it with --exec-path=<DIR>
    #[arg(long = "exec-path", value_name = "DIR", num_args = 0..=1, require_equals = true)]
    pub exec_path: Option<Option<String>>,

    /// How compiled-in paths are resolved
    #[arg(long = "path-mode", value_enum, env = "RELAY_PATH_MODE")]
    pub path_mode: Option<PathModeArg>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Directory given with `--exec-path=<DIR>`.
    pub fn exec_path_override(&self) -> Option<&str> {
        self.exec_path.as_ref()?.as_deref()
    }

    /// True for a bare `--exec-path`.
    pub fn print_exec_path(&self) -> bool {
        matches!(self.exec_path, Some(None))
    }
}
