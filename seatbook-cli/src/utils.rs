//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and opening
//! the cabin.

use crate::error::CliError;
use seatbook::{Cabin, Config, ConfigBuilder, Database, DatabaseConfig, Logger, OperationPlan};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger resolved from the flags, environment and config.
    pub logger: Logger,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Merged configuration from file and environment.
    pub config: Config,
}

/// Resolve the data directory path.
///
/// Priority: `--data-dir` (or `SEATBOOK_DATA_DIR`) > `~/.seatbook`.
pub fn resolve_data_dir(data_dir: Option<&Path>) -> Result<PathBuf, CliError> {
    match data_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => seatbook::database::resolve_data_dir().map_err(CliError::from),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `<data dir>/config.yaml`
/// 3. Built-in defaults
///
/// Global flags are applied on top by the callers that use them.
pub fn load_configuration(data_dir: Option<&Path>) -> Result<Config, CliError> {
    let dir = resolve_data_dir(data_dir)?;
    ConfigBuilder::new()
        .with_data_dir(dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Busy timeout: global option > config > library default.
fn busy_timeout(global: &GlobalOptions) -> Option<Duration> {
    global
        .busy_timeout
        .or(global.config.busy_timeout_seconds)
        .map(Duration::from_secs)
}

/// Open the booking database in the resolved data directory.
pub fn open_database(global: &GlobalOptions) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global.data_dir.as_deref())?;
    global
        .logger
        .info(&format!("Opening database in {}", data_dir.display()));
    let mut db_config = DatabaseConfig::in_data_dir(data_dir);

    if let Some(timeout) = busy_timeout(global) {
        db_config = db_config.with_busy_timeout(timeout);
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Open the cabin: the database plus a seat map restored from it.
pub fn open_cabin(global: &GlobalOptions) -> Result<Cabin, CliError> {
    let db = open_database(global)?;
    Cabin::open(db).map_err(CliError::from)
}

/// Print the actions and warnings of a plan that was not executed.
pub fn report_dry_run(plan: &OperationPlan) {
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in plan.actions.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, action.description());
    }
    if !plan.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &plan.warnings {
            eprintln!("  - {warning}");
        }
    }
}
