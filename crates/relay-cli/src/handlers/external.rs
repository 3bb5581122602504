//! Dispatch of non-built-in commands to `relay-<name>` helpers.

use relay_core::ProcessExecutor;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Run helper `relay-<name>` with the remaining arguments.
///
/// `args[0]` is the command name. On success the helper replaces this
/// process, so this only returns on failure (or under a test executor).
pub fn execute<E: ProcessExecutor>(ctx: &CliContext<E>, args: &[String]) -> Result<(), CliError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(CliError::Arguments("missing command name".to_string()));
    };

    ctx.launcher.exec_helper(name, rest).map_err(|err| {
        if err.is_program_not_found() {
            debug!(command = name.as_str(), "no helper on PATH");
            CliError::UnknownCommand(name.clone())
        } else {
            err.into()
        }
    })
}
