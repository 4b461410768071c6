//! Passenger booking records.
//!
//! A [`Booking`] ties a [`Reference`] to a passenger and a seat. Bookings
//! exist exactly as long as their seat is reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reference::Reference;
use crate::seat::SeatCode;

/// Passenger details collected when a seat is booked.
///
/// All fields are trimmed and must be non-empty.
///
/// # Examples
///
/// ```
/// use seatbook::Passenger;
///
/// let passenger = Passenger::new(" X123 ", "Ada", "Lovelace").unwrap();
/// assert_eq!(passenger.passport(), "X123");
///
/// assert!(Passenger::new("", "Ada", "Lovelace").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    passport: String,
    first_name: String,
    last_name: String,
}

impl Passenger {
    /// Creates passenger details.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that is empty
    /// after trimming whitespace.
    pub fn new(
        passport: impl AsRef<str>,
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            passport: required("passport", passport.as_ref())?,
            first_name: required("first_name", first_name.as_ref())?,
            last_name: required("last_name", last_name.as_ref())?,
        })
    }

    /// Returns the passport identifier.
    #[must_use]
    pub fn passport(&self) -> &str {
        &self.passport
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: "must be non-empty".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    reference: Reference,
    #[serde(flatten)]
    passenger: Passenger,
    seat: SeatCode,
}

impl Booking {
    /// Creates a booking record.
    #[must_use]
    pub const fn new(reference: Reference, passenger: Passenger, seat: SeatCode) -> Self {
        Self {
            reference,
            passenger,
            seat,
        }
    }

    /// Returns the booking reference.
    #[must_use]
    pub const fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Returns the passenger details.
    #[must_use]
    pub const fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    /// Returns the booked seat.
    #[must_use]
    pub const fn seat(&self) -> SeatCode {
        self.seat
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) seat {}",
            self.reference,
            self.passenger.first_name,
            self.passenger.last_name,
            self.passenger.passport,
            self.seat
        )
    }
}

/// Validation error for passenger fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
