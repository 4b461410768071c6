//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` to
//! ensure they run sequentially and don't interfere with each other.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use seatbook::config::{Config, ConfigBuilder, ConfigLoader, OutputFormat};
use seatbook::error::Error;
use seatbook::LogLevel;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_seatbook_env_vars() -> Vec<EnvGuard> {
    [
        "SEATBOOK_BUSY_TIMEOUT",
        "SEATBOOK_LOG_MODE",
        "SEATBOOK_OUTPUT_FORMAT",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("config.yaml"), content).unwrap();
}

#[test]
#[serial]
fn test_missing_file_gives_defaults() {
    let _guards = clear_seatbook_env_vars();
    let dir = TempDir::new().unwrap();

    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_file_values_are_loaded() {
    let _guards = clear_seatbook_env_vars();
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "busy_timeout_seconds: 7\nlog_mode: quiet\noutput_format: json\n",
    );

    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    assert_eq!(config.busy_timeout_seconds, Some(7));
    assert_eq!(config.log_mode, Some(LogLevel::Quiet));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let _guards = clear_seatbook_env_vars();
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "busy_timeout_seconds: 7\noutput_format: csv\n");
    let _timeout = EnvGuard::set("SEATBOOK_BUSY_TIMEOUT", "2");

    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    assert_eq!(config.busy_timeout_seconds, Some(2));
    assert_eq!(config.output_format, Some(OutputFormat::Csv));
}

#[test]
#[serial]
fn test_programmatic_override_wins() {
    let _guards = clear_seatbook_env_vars();
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "log_mode: quiet\n");
    let _mode = EnvGuard::set("SEATBOOK_LOG_MODE", "normal");

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .with_config(Config {
            log_mode: Some(LogLevel::Verbose),
            ..Config::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.log_mode, Some(LogLevel::Verbose));
}

#[test]
#[serial]
fn test_skip_env_ignores_invalid_env() {
    let _guards = clear_seatbook_env_vars();
    let _bad = EnvGuard::set("SEATBOOK_BUSY_TIMEOUT", "later");

    assert!(ConfigBuilder::new().skip_files().build().is_err());
    assert!(ConfigBuilder::new().skip_files().skip_env().build().is_ok());
}

#[test]
fn test_unknown_key_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "rows: 90\n");

    let result = ConfigLoader::load_user_config(Some(dir.path()));
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_config_path_is_inside_data_dir() {
    let dir = TempDir::new().unwrap();
    let path = ConfigLoader::user_config_path(Some(dir.path())).unwrap();
    assert_eq!(path, dir.path().join("config.yaml"));
}
