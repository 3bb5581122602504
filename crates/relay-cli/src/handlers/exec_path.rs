//! `relay --exec-path` handler.

use std::path::Path;

use relay_core::ProcessExecutor;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the directory relay looks in for helpers.
pub fn execute<E: ProcessExecutor>(ctx: &CliContext<E>) -> Result<(), CliError> {
    let exec_path = ctx.paths.exec_path(ctx.env.as_ref())?;
    println!("{}", Path::new(&exec_path).display());
    Ok(())
}
