//! Main entry point for the seatbook CLI.
//!
//! This is the command-line interface for the cabin seat booking system.
//! With no subcommand it runs the interactive menu; the subcommands expose
//! each menu action as a one-shot command:
//! - `check`: Show the status of a seat
//! - `book`: Book a free seat for a passenger
//! - `free`: Free a reserved seat
//! - `map`: Print the seat map
//! - `available`: List all free seats

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::MenuCommand;
use error::CliError;
use utils::{load_configuration, GlobalOptions};

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_configuration(cli.data_dir.as_deref())?;

    // Route library log records to stderr at the requested verbosity
    let logger = seatbook::init_logger(cli.verbose, cli.quiet, config.log_mode);
    logger.install();

    let global = GlobalOptions {
        logger,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        config,
    };

    match cli.command.unwrap_or(Command::Menu(MenuCommand {})) {
        Command::Menu(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Free(cmd) => cmd.execute(&global),
        Command::Map(cmd) => cmd.execute(&global),
        Command::Available(cmd) => cmd.execute(&global),
        Command::Bookings(cmd) => cmd.execute(&global),
        Command::ShowDataDir(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
