//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SEATBOOK_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Environment variable overriding the busy timeout (seconds).
pub const BUSY_TIMEOUT_ENV: &str = "SEATBOOK_BUSY_TIMEOUT";

/// Environment variable overriding the listing output format.
pub const OUTPUT_FORMAT_ENV: &str = "SEATBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: BUSY_TIMEOUT_ENV.into(),
                    message: "Must be a non-negative integer".into(),
                })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        Ok(())
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{s}' (expected table/json/csv/tsv)"),
            }),
        }
    }
}
