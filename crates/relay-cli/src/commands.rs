//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resolved bootstrap paths (for debugging)
    Paths {
        /// Print as JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },

    /// Run helper `relay-<name>` with the remaining arguments
    #[command(external_subcommand)]
    External(Vec<String>),
}
