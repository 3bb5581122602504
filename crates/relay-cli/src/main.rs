//! CLI entry point - the composition root.
//!
//! Bootstrap runs before anything else so that `PATH` is rewritten while the
//! process is still single-threaded.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use relay_cli::{Cli, CliError, Commands, bootstrap, handlers, logging};

fn run() -> Result<()> {
    // Load environment variables (may carry RELAY_PATH_MODE / RELAY_EXEC_PATH)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let argv0 = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ctx = bootstrap(&cli, &argv0)?;

    if cli.print_exec_path() {
        handlers::exec_path::execute(&ctx)?;
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths { json } => handlers::paths::execute(&ctx, json)?,
        Commands::External(args) => handlers::external::execute(&ctx, &args)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("relay: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
