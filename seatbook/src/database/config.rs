//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the booking database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "seatbook.db";

/// Name of the data directory under the user's home directory.
pub const DATA_DIR_NAME: &str = ".seatbook";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SEATBOOK_DATA_DIR";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use seatbook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/seatbook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Creates a configuration for the database file inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.seatbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Resolves the data directory using the environment or the default.
///
/// The resolution order is:
/// 1. `$SEATBOOK_DATA_DIR` if set
/// 2. `~/.seatbook` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SEATBOOK_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path, `<data dir>/seatbook.db`.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}
