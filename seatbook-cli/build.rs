//! Build script for seatbook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("seatbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book and free seats in an aircraft cabin")
        .long_about(
            "Command-line tool for booking and freeing seats in an 80-row aircraft cabin. \
             Without a subcommand the interactive menu starts.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SEATBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SEATBOOK_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("menu")
                .about("Run the interactive booking menu")
                .long_about("Check, book and free seats from a numbered menu"),
            Command::new("check")
                .about("Show the status of a seat")
                .long_about("Report whether a seat is free, reserved or not bookable"),
            Command::new("book")
                .about("Book a free seat for a passenger")
                .long_about("Book a free seat and print the new booking reference"),
            Command::new("free")
                .about("Free a reserved seat")
                .long_about("Release a reserved seat and delete its booking"),
            Command::new("map")
                .about("Print the seat map")
                .long_about("Print every row of the cabin with each seat's status symbol"),
            Command::new("available")
                .about("List all free seats")
                .long_about("Print the number of free seats followed by their codes"),
            Command::new("bookings")
                .about("List stored bookings")
                .long_about("Display stored bookings as a table, JSON, CSV or TSV"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the seatbook data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("seatbook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
