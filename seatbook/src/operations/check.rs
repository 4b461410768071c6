//! Seat status queries.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::seat::{parse_code, SeatCode, SeatMap, SeatStatus};

/// Outcome of checking a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "availability", rename_all = "snake_case")]
pub enum SeatCheck {
    /// The seat can be booked.
    Free {
        /// The checked seat.
        seat: SeatCode,
    },
    /// The seat is held by a booking.
    Reserved {
        /// The checked seat.
        seat: SeatCode,
    },
    /// The seat is never bookable.
    NotBookable {
        /// The checked seat.
        seat: SeatCode,
        /// Aisle or Storage.
        status: SeatStatus,
    },
}

impl SeatCheck {
    /// Returns the checked seat.
    #[must_use]
    pub const fn seat(&self) -> SeatCode {
        match self {
            Self::Free { seat } | Self::Reserved { seat } | Self::NotBookable { seat, .. } => *seat,
        }
    }

    /// Returns the seat's status.
    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        match self {
            Self::Free { .. } => SeatStatus::Free,
            Self::Reserved { .. } => SeatStatus::Reserved,
            Self::NotBookable { status, .. } => *status,
        }
    }
}

impl fmt::Display for SeatCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free { seat } => write!(f, "Seat {seat} is free"),
            Self::Reserved { seat } => write!(f, "Seat {seat} is reserved"),
            Self::NotBookable { seat, status } => {
                write!(f, "Seat {seat} is not bookable ({status})")
            }
        }
    }
}

/// Parses `code` and reports the seat's availability.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidSeatCode`] if the code is malformed.
///
/// # Examples
///
/// ```
/// use seatbook::operations::{check_seat, SeatCheck};
/// use seatbook::SeatMap;
///
/// let map = SeatMap::new();
/// let check = check_seat(&map, "12b").unwrap();
/// assert!(matches!(check, SeatCheck::Free { .. }));
/// assert_eq!(check.to_string(), "Seat 12B is free");
/// ```
pub fn check_seat(map: &SeatMap, code: &str) -> Result<SeatCheck> {
    let seat = parse_code(code)?;
    Ok(match map.status_of(seat) {
        SeatStatus::Free => SeatCheck::Free { seat },
        SeatStatus::Reserved => SeatCheck::Reserved { seat },
        status => SeatCheck::NotBookable { seat, status },
    })
}
