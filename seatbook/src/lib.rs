#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seatbook
//!
//! A library for managing seat reservations in a single aircraft cabin.
//!
//! The cabin has 80 rows of six seats (A-C left of the aisle, D-F right).
//! Seats 77D-F and 78D-F hold storage and can never be booked. Bookings
//! are persisted in a local `SQLite` store, and every booked seat is
//! Reserved in the seat map for exactly as long as its record exists.
//!
//! ## Core Types
//!
//! - [`SeatCode`], [`Row`], [`Column`] and [`SeatStatus`]: seat addressing
//! - [`SeatMap`]: the in-memory status table
//! - [`Booking`], [`Passenger`] and [`Reference`]: stored booking records
//! - [`Database`]: the reservation store
//! - [`Cabin`]: seat map and store kept consistent together
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use seatbook::{Cabin, Database, Passenger};
//!
//! let mut cabin = Cabin::open(Database::open_in_memory().unwrap()).unwrap();
//!
//! let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
//! let reference = cabin.book_seat("12B", passenger).unwrap();
//! println!("booked 12B as {reference}");
//!
//! assert_eq!(cabin.list_available().count, 473);
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reference;
pub mod seat;

// Re-export key types at crate root for convenience
pub use booking::{Booking, Passenger};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    AvailableSeats, BookOptions, BookPlan, Cabin, ExecutionResult, FreePlan, OperationPlan,
    PlanAction, PlanExecutor, SeatCheck,
};
pub use reference::Reference;
pub use seat::{parse_code, Column, Row, SeatCode, SeatMap, SeatStatus};
