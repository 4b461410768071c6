//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the seatbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; seatbook creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("seatbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Inherited `SEATBOOK_*` variables are cleared so the host environment
    /// cannot leak into tests.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("seatbook").expect("Failed to find seatbook binary");
        for var in [
            "SEATBOOK_DATA_DIR",
            "SEATBOOK_BUSY_TIMEOUT",
            "SEATBOOK_LOG_MODE",
            "SEATBOOK_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the booking database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("seatbook.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), content)
            .expect("Failed to write config");
    }

    /// Book a seat for a fixed passenger and return the printed reference.
    ///
    /// # Panics
    /// Panics if the book command fails.
    pub fn book(&self, seat: &str) -> String {
        let output = self
            .command()
            .args([
                "book",
                seat,
                "--passport",
                "X123",
                "--first-name",
                "Ada",
                "--last-name",
                "Lovelace",
            ])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}
