//! Database layer for persistent storage of passenger bookings.
//!
//! This module provides a SQLite-based store for booking records, including
//! connection management, schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```
//! use seatbook::database::Database;
//! use seatbook::{Booking, Passenger};
//!
//! let db = Database::open_in_memory().unwrap();
//!
//! let reference = Database::generate_reference(db.connection()).unwrap();
//! let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
//! let booking = Booking::new(reference, passenger, "1A".parse().unwrap());
//! Database::insert_booking(db.connection(), &booking).unwrap();
//!
//! assert_eq!(Database::count_bookings(db.connection()).unwrap(), 1);
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
