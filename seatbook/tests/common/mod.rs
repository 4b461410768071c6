//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! seatbook library against real on-disk databases.

use std::path::{Path, PathBuf};

use seatbook::database::{Database, DatabaseConfig};
use seatbook::{Booking, Cabin, Passenger, Reference};

/// A temporary data directory holding one database file.
///
/// The directory is removed when the fixture is dropped.
pub struct TestStore {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates an empty data directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the data directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the database file path.
    pub fn db_path(&self) -> PathBuf {
        DatabaseConfig::in_data_dir(self.path()).path
    }

    /// Opens a fresh connection to the store.
    pub fn open(&self) -> Database {
        Database::open(DatabaseConfig::in_data_dir(self.path())).unwrap()
    }

    /// Opens a cabin over a fresh connection to the store.
    pub fn cabin(&self) -> Cabin {
        Cabin::open(self.open()).unwrap()
    }
}

/// Creates passenger details for tests.
#[allow(dead_code)]
pub fn passenger(passport: &str) -> Passenger {
    Passenger::new(passport, "Ada", "Lovelace").unwrap()
}

/// Creates a booking record with a fixed passenger.
#[allow(dead_code)]
pub fn booking(reference: &str, seat: &str) -> Booking {
    Booking::new(
        Reference::parse(reference).unwrap(),
        passenger("X123"),
        seat.parse().unwrap(),
    )
}
