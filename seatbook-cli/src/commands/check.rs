//! Check command implementation.

use crate::error::CliError;
use crate::utils::{open_cabin, GlobalOptions};
use clap::Args;

/// Show the status of a seat.
#[derive(Args)]
pub struct CheckCommand {
    /// Seat code, e.g. 12B
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cabin = open_cabin(global)?;
        let check = cabin.check_seat(&self.seat)?;

        if self.json {
            let json = serde_json::to_string_pretty(&check)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{json}");
        } else {
            println!("{check}");
        }

        Ok(())
    }
}
