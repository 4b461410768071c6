//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AvailableCommand, BookCommand, BookingsCommand, CheckCommand, CompletionsCommand,
    FreeCommand, MapCommand, MenuCommand, ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking seats in an aircraft cabin.
///
/// Without a subcommand the interactive menu starts.
#[derive(Parser)]
#[command(name = "seatbook")]
#[command(version, about = "Book and free seats in an aircraft cabin", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SEATBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SEATBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive booking menu
    Menu(MenuCommand),

    /// Show the status of a seat
    Check(CheckCommand),

    /// Book a free seat for a passenger
    Book(BookCommand),

    /// Free a reserved seat
    Free(FreeCommand),

    /// Print the seat map
    Map(MapCommand),

    /// List all free seats
    Available(AvailableCommand),

    /// List stored bookings
    Bookings(BookingsCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
