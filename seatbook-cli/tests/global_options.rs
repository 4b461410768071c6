//! Tests for global options and their environment variables.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("SEATBOOK_DATA_DIR", &env.data_dir)
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_flag_overrides_environment() {
    let env = TestEnv::new();
    let other = env.path().join("other");

    env.command_bare()
        .env("SEATBOOK_DATA_DIR", &other)
        .arg("--data-dir")
        .arg(&env.data_dir)
        .arg("show-data-dir")
        .assert()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_data_dirs_are_isolated() {
    let env = TestEnv::new();
    let other = env.path().join("other");
    env.book("1A");

    env.command_bare()
        .arg("--data-dir")
        .arg(&other)
        .args(["check", "1A"])
        .assert()
        .stdout("Seat 1A is free\n");
}

#[test]
fn test_quiet_suppresses_status_messages() {
    let env = TestEnv::new();
    env.command()
        .args([
            "--quiet",
            "book",
            "1A",
            "--passport",
            "X",
            "--first-name",
            "A",
            "--last-name",
            "B",
        ])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_emits_debug_records() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "map"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_verbose_reports_database_location() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "check", "1A"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "INFO: Opening database in {}",
            env.data_dir.display()
        )));

    env.command()
        .args(["check", "1A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO:").not());
}

#[test]
fn test_log_mode_from_config() {
    let env = TestEnv::new();
    env.write_config("log_mode: verbose\n");

    env.command()
        .arg("available")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
