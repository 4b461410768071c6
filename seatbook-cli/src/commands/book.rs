//! Book command implementation.
//!
//! This module implements the `book` command, which books a free seat and
//! prints the new booking reference on stdout.

use crate::error::CliError;
use crate::utils::{open_cabin, report_dry_run, GlobalOptions};
use clap::Args;
use seatbook::Passenger;

/// Book a free seat for a passenger.
#[derive(Args)]
pub struct BookCommand {
    /// Seat code, e.g. 12B
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Passport number
    #[arg(long, value_name = "PASSPORT")]
    pub passport: String,

    /// Passenger first name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Passenger last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let passenger = Passenger::new(&self.passport, &self.first_name, &self.last_name)
            .map_err(seatbook::Error::from)?;

        let seat = seatbook::parse_code(&self.seat)?;
        let mut cabin = open_cabin(global)?;
        let plan = cabin.plan_booking(&self.seat, passenger)?;

        if self.dry_run {
            if !global.quiet {
                report_dry_run(&plan);
            }
            return Ok(());
        }

        let result = cabin.execute(&plan, false)?;
        let reference = result.reference.ok_or_else(|| {
            CliError::Library(seatbook::Error::NotFound {
                resource: "booking reference".to_string(),
            })
        })?;

        println!("{reference}");
        if !global.quiet {
            eprintln!(
                "Booked seat {} for {} {}",
                seat,
                self.first_name.trim(),
                self.last_name.trim()
            );
        }
        for warning in &result.warnings {
            global.logger.warn(warning);
        }

        Ok(())
    }
}
