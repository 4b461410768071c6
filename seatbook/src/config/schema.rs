//! Configuration schema definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered: a later source
/// only overrides the fields it sets.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("busy_timeout_seconds: 10\noutput_format: json\n").unwrap();
/// assert_eq!(config.busy_timeout_seconds, Some(10));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Default log verbosity.
    pub log_mode: Option<LogLevel>,

    /// Default output format for booking listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: Self) {
        if other.busy_timeout_seconds.is_some() {
            self.busy_timeout_seconds = other.busy_timeout_seconds;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
    }
}

/// Output format for booking listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}
