//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Booking, Passenger, Reference};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Creates a booking for a fixed test passenger.
///
/// # Panics
///
/// Panics if the reference or seat code is invalid.
#[must_use]
pub fn create_test_booking(reference: &str, seat: &str) -> Booking {
    Booking::new(
        Reference::parse(reference).unwrap(),
        Passenger::new("X123", "Ada", "Lovelace").unwrap(),
        seat.parse().unwrap(),
    )
}
