//! Bootstrap layer for the relay command suite.
//!
//! Finds where `relay-*` helper programs live, puts that directory (and the
//! directory relay was started from) at the front of `PATH`, and re-invokes
//! relay or its helpers.
//!
//! ```no_run
//! use relay_core::{BootstrapConfig, BootstrapContext, CommandLauncher, ProcessEnvironment};
//!
//! let ctx = BootstrapContext::new(BootstrapConfig::compiled());
//! let argv0 = std::env::args().next().unwrap_or_default();
//! ctx.extract_invocation_path(&argv0);
//! ctx.setup_path(&ProcessEnvironment)?;
//!
//! let launcher = CommandLauncher::new(ctx.config());
//! launcher.exec_helper("status", &["--short"])?;
//! # Ok::<(), relay_core::BootstrapError>(())
//! ```
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod launcher;
pub mod paths;

pub use config::{
    BootstrapConfig, DEFAULT_BINDIR, DEFAULT_EXEC_PATH, DEFAULT_MAX_ARGS, DEFAULT_PROGRAM_NAME,
    EXEC_PATH_ENV,
};
pub use context::BootstrapContext;
pub use env::{Environment, MemoryEnvironment, ProcessEnvironment};
pub use error::BootstrapError;
pub use launcher::{CommandLauncher, ProcessExecutor, SystemExecutor};
pub use paths::{
    ExecPathResolution, ExecPathSource, FALLBACK_SEARCH_PATH, PathResolutionMode, ResolvedPaths,
    split_invocation_path,
};

// Only the Unix-specific unit tests need a scratch directory
#[cfg(all(test, not(unix)))]
use tempfile as _;
