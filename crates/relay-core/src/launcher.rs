//! Re-invoking relay or one of its helpers.
//!
//! A launch builds an argument vector (`Building`), traces it (`Ready`) and
//! hands it to a [`ProcessExecutor`]. Either the process image is replaced
//! and the call never returns, or the failure comes back as
//! [`BootstrapError::LaunchFailed`] and the caller keeps running. There is
//! no retry.
//!
//! Programs are looked up by bare name through `PATH`, so
//! [`BootstrapContext::setup_path`](crate::BootstrapContext::setup_path) must
//! have run first.

use std::io;
use std::process::Command;

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

/// Replaces the current process image.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessExecutor {
    /// Replace the current process with `program`, resolved through `PATH`,
    /// passing `argv` (including `argv[0]`).
    ///
    /// Returns only on failure. `Ok(())` is reserved for test doubles that
    /// record the launch instead of performing it.
    fn exec(&self, program: &str, argv: &[String]) -> io::Result<()>;
}

/// Executor backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    #[cfg(unix)]
    fn exec(&self, program: &str, argv: &[String]) -> io::Result<()> {
        use std::os::unix::process::CommandExt;

        let mut cmd = Command::new(program);
        if let Some((arg0, rest)) = argv.split_first() {
            cmd.arg0(arg0).args(rest);
        }
        Err(cmd.exec())
    }

    // No exec(2) here: run the program to completion and exit with its status.
    #[cfg(not(unix))]
    fn exec(&self, program: &str, argv: &[String]) -> io::Result<()> {
        let status = Command::new(program).args(argv.iter().skip(1)).status()?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

/// Builds argument vectors and launches relay programs.
#[derive(Debug)]
pub struct CommandLauncher<E = SystemExecutor> {
    program: String,
    max_args: Option<usize>,
    executor: E,
}

impl CommandLauncher<SystemExecutor> {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self::with_executor(config, SystemExecutor)
    }
}

impl<E: ProcessExecutor> CommandLauncher<E> {
    pub fn with_executor(config: &BootstrapConfig, executor: E) -> Self {
        Self {
            program: config.program_name.clone(),
            max_args: config.max_args,
            executor,
        }
    }

    /// Canonical program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Executable name of a helper: `relay-<subcommand>`.
    pub fn helper_name(&self, subcommand: &str) -> String {
        format!("{}-{subcommand}", self.program)
    }

    /// Argument vector for re-invoking the main program: `[program, args...]`.
    pub fn prepare_argv<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<String>, BootstrapError> {
        self.argv_for(&self.program, args)
    }

    /// Re-invoke the main program with `args`.
    pub fn exec_cmd<S: AsRef<str>>(&self, args: &[S]) -> Result<(), BootstrapError> {
        let argv = self.prepare_argv(args)?;
        self.launch(&self.program, &argv)
    }

    /// Launch helper `relay-<subcommand>` with `args`.
    pub fn exec_helper<S: AsRef<str>>(
        &self,
        subcommand: &str,
        args: &[S],
    ) -> Result<(), BootstrapError> {
        let program = self.helper_name(subcommand);
        let argv = self.argv_for(&program, args)?;
        self.launch(&program, &argv)
    }

    fn argv_for<S: AsRef<str>>(
        &self,
        program: &str,
        args: &[S],
    ) -> Result<Vec<String>, BootstrapError> {
        if let Some(max) = self.max_args {
            if args.len() > max {
                return Err(BootstrapError::TooManyArgs {
                    program: program.to_string(),
                    max,
                });
            }
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(program.to_string());
        argv.extend(args.iter().map(|arg| arg.as_ref().to_string()));
        Ok(argv)
    }

    fn launch(&self, program: &str, argv: &[String]) -> Result<(), BootstrapError> {
        debug!("exec: {}", shell_words::join(argv));

        self.executor.exec(program, argv).map_err(|source| {
            debug!("exec failed: {source}");
            BootstrapError::LaunchFailed {
                program: program.to_string(),
                source,
            }
        })
    }
}
