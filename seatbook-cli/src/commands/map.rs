//! Map command implementation.

use crate::error::CliError;
use crate::utils::{open_cabin, GlobalOptions};
use clap::Args;

/// Print the seat map.
#[derive(Args)]
pub struct MapCommand {}

impl MapCommand {
    /// Execute the map command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cabin = open_cabin(global)?;
        print!("{}", cabin.render());
        Ok(())
    }
}
