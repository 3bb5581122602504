//! CLI bootstrap - the composition root.
//!
//! The only place where the relay-core pieces are wired together:
//! - `BootstrapConfig` from compiled-in defaults plus `--path-mode`
//! - `BootstrapContext` seeded from argv[0] and `--exec-path=<DIR>`
//! - `PATH` rewritten so helpers resolve by bare name
//! - `CommandLauncher` for dispatching to `relay-<name>`
//!
//! Must run before any other thread is started, since it writes `PATH`.

use relay_core::{
    BootstrapConfig, BootstrapContext, CommandLauncher, Environment, ProcessEnvironment,
    ProcessExecutor, SystemExecutor,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Fully composed context for CLI commands.
pub struct CliContext<E = SystemExecutor> {
    /// Resolved bootstrap state.
    pub paths: BootstrapContext,
    /// Environment the search path was written to.
    pub env: Box<dyn Environment>,
    /// Launcher for relay and its helpers.
    pub launcher: CommandLauncher<E>,
}

/// Bootstrap against the real process environment.
pub fn bootstrap(cli: &Cli, argv0: &str) -> Result<CliContext, CliError> {
    bootstrap_with(
        cli,
        argv0,
        BootstrapConfig::compiled(),
        Box::new(ProcessEnvironment),
        SystemExecutor,
    )
}

/// Bootstrap from an explicit base config, environment and executor.
///
/// `--path-mode` is applied on top of `config`.
pub fn bootstrap_with<E: ProcessExecutor>(
    cli: &Cli,
    argv0: &str,
    mut config: BootstrapConfig,
    env: Box<dyn Environment>,
    executor: E,
) -> Result<CliContext<E>, CliError> {
    if let Some(mode) = cli.path_mode {
        config = config.with_mode(mode.into());
    }

    let paths = BootstrapContext::new(config);
    let basename = paths.extract_invocation_path(argv0);
    debug!(basename, mode = %paths.mode(), "bootstrapping");

    if let Some(dir) = cli.exec_path_override() {
        paths.set_exec_path_override(dir)?;
    }

    paths.setup_path(env.as_ref())?;

    let launcher = CommandLauncher::with_executor(paths.config(), executor);
    Ok(CliContext {
        paths,
        env,
        launcher,
    })
}
