//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `menu`: Interactive booking menu (the default)
//! - `check`: Show the status of a seat
//! - `book`: Book a free seat for a passenger
//! - `free`: Free a reserved seat
//! - `map`: Print the seat map
//! - `available`: List all free seats
//! - `bookings`: List stored bookings in various formats
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod available;
pub mod book;
pub mod bookings;
pub mod check;
pub mod completions;
pub mod free;
pub mod map;
pub mod menu;
pub mod show_data_dir;

pub use available::AvailableCommand;
pub use book::BookCommand;
pub use bookings::BookingsCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use free::FreeCommand;
pub use map::MapCommand;
pub use menu::MenuCommand;
pub use show_data_dir::ShowDataDirCommand;
