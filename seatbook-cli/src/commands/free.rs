//! Free command implementation.

use crate::error::CliError;
use crate::utils::{open_cabin, report_dry_run, GlobalOptions};
use clap::Args;

/// Free a reserved seat.
#[derive(Args)]
pub struct FreeCommand {
    /// Seat code, e.g. 12B
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl FreeCommand {
    /// Execute the free command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let seat = seatbook::parse_code(&self.seat)?;
        let mut cabin = open_cabin(global)?;
        let plan = cabin.plan_release(&self.seat)?;

        if self.dry_run {
            if !global.quiet {
                report_dry_run(&plan);
            }
            return Ok(());
        }

        let result = cabin.execute(&plan, false)?;

        if !global.quiet {
            eprintln!(
                "Freed seat {} ({} booking(s) removed)",
                seat,
                result.deleted
            );
        }
        for warning in &result.warnings {
            global.logger.warn(warning);
        }

        Ok(())
    }
}
