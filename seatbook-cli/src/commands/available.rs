//! Available command implementation.

use crate::error::CliError;
use crate::utils::{open_cabin, GlobalOptions};
use clap::Args;

/// List all free seats.
#[derive(Args)]
pub struct AvailableCommand {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AvailableCommand {
    /// Execute the available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cabin = open_cabin(global)?;
        let available = cabin.list_available();

        if self.json {
            let json = serde_json::to_string_pretty(&available)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{json}");
        } else {
            println!("{available}");
        }

        Ok(())
    }
}
