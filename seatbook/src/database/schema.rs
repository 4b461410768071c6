//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions, indices, and constants
//! for the booking store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the bookings table.
///
/// One row per reserved seat. The reference is the primary key so a
/// duplicate insert fails instead of overwriting an existing booking.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        reference TEXT PRIMARY KEY NOT NULL,
        passport TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        seat_row INTEGER NOT NULL,
        seat_column TEXT NOT NULL
    )";

/// SQL statement to create an index on the seat coordinate.
///
/// Freeing a seat deletes by coordinate, and startup reads every booked seat.
pub const CREATE_SEAT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_seat ON bookings(seat_row, seat_column)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking. Plain INSERT: never replaces.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (reference, passport, first_name, last_name, seat_row, seat_column)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete every booking for a seat.
pub const DELETE_BOOKINGS_BY_SEAT: &str = r"
    DELETE FROM bookings
    WHERE seat_row = ? AND seat_column = ?
";
