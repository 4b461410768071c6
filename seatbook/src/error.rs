//! Error types for the seatbook library.
//!
//! This module provides the error hierarchy for all seat map, store and
//! booking operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::seat::{SeatCode, SeatStatus};

/// Result type alias for operations that may fail with a seatbook error.
///
/// # Examples
///
/// ```
/// use seatbook::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the seatbook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A seat code was malformed or outside the cabin.
    #[error("invalid seat code '{code}': {reason}")]
    InvalidSeatCode {
        /// The code as entered.
        code: String,
        /// Why the code was rejected.
        reason: String,
    },

    /// A booking was attempted on a seat that is not free.
    #[error("seat {seat} cannot be booked (status: {status})")]
    SeatNotFree {
        /// The seat that was requested.
        seat: SeatCode,
        /// The seat's current status.
        status: SeatStatus,
    },

    /// A seat was freed that is not currently reserved.
    #[error("seat {seat} is not currently reserved (status: {status})")]
    SeatNotReserved {
        /// The seat that was requested.
        seat: SeatCode,
        /// The seat's current status.
        status: SeatStatus,
    },

    /// A booking reference is already stored.
    #[error("booking reference {reference} already exists")]
    DuplicateReference {
        /// The conflicting reference.
        reference: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a rejected seat state transition.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::{Error, SeatCode, SeatStatus};
    ///
    /// let seat: SeatCode = "77D".parse().unwrap();
    /// let err = Error::SeatNotFree { seat, status: SeatStatus::Storage };
    /// assert!(err.is_seat_state());
    /// ```
    #[must_use]
    pub fn is_seat_state(&self) -> bool {
        matches!(
            self,
            Self::SeatNotFree { .. } | Self::SeatNotReserved { .. }
        )
    }

    /// Check if error stems from user input rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidSeatCode { .. } | Self::Validation { .. })
    }
}
