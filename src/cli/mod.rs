//! CLI module for bookshelf
//!
//! One command: `bookshelf serve`, which opens the catalog and runs
//! the HTTP server until stopped.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
