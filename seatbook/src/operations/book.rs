//! Book operation planning.

use rusqlite::Connection;

use crate::booking::{Booking, Passenger};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::seat::{SeatCode, SeatMap, SeatStatus};

use super::plan::{OperationPlan, PlanAction};

/// Options for a book operation.
#[derive(Debug, Clone)]
pub struct BookOptions {
    /// The seat to book.
    pub seat: SeatCode,

    /// The passenger taking the seat.
    pub passenger: Passenger,
}

impl BookOptions {
    /// Creates book options for a seat and passenger.
    #[must_use]
    pub const fn new(seat: SeatCode, passenger: Passenger) -> Self {
        Self { seat, passenger }
    }
}

/// A book plan generator.
///
/// # Examples
///
/// ```
/// use seatbook::operations::{BookOptions, BookPlan};
/// use seatbook::{Database, Passenger, SeatMap};
///
/// let db = Database::open_in_memory().unwrap();
/// let map = SeatMap::new();
/// let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
///
/// let options = BookOptions::new("1A".parse().unwrap(), passenger);
/// let plan = BookPlan::new(options).build_plan(&map, db.connection()).unwrap();
/// assert_eq!(plan.len(), 2);
/// assert!(plan.reference().is_some());
/// ```
pub struct BookPlan {
    options: BookOptions,
}

impl BookPlan {
    /// Creates a new book plan with the given options.
    #[must_use]
    pub const fn new(options: BookOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this booking.
    ///
    /// Draws a fresh reference against the store but does not modify it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatNotFree`] unless the seat is Free, or an error if
    /// the stored references cannot be read.
    pub fn build_plan(&self, map: &SeatMap, conn: &Connection) -> Result<OperationPlan> {
        let seat = self.options.seat;
        let status = map.status_of(seat);
        if status != SeatStatus::Free {
            return Err(Error::SeatNotFree { seat, status });
        }

        let reference = Database::generate_reference(conn)?;
        let booking = Booking::new(reference, self.options.passenger.clone(), seat);

        Ok(OperationPlan::new(format!("Book seat {seat}"))
            .add_action(PlanAction::InsertBooking(booking))
            .add_action(PlanAction::MarkSeat {
                seat,
                status: SeatStatus::Reserved,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(code: &str) -> BookOptions {
        BookOptions::new(
            code.parse().unwrap(),
            Passenger::new("X123", "Ada", "Lovelace").unwrap(),
        )
    }

    #[test]
    fn test_plan_for_free_seat() {
        let db = Database::open_in_memory().unwrap();
        let map = SeatMap::new();

        let plan = BookPlan::new(options("1A"))
            .build_plan(&map, db.connection())
            .unwrap();

        assert_eq!(plan.description, "Book seat 1A");
        assert!(matches!(&plan.actions[0], PlanAction::InsertBooking(b) if b.seat().to_string() == "1A"));
        assert_eq!(
            plan.actions[1],
            PlanAction::MarkSeat {
                seat: "1A".parse().unwrap(),
                status: SeatStatus::Reserved
            }
        );
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_plan_does_not_touch_store() {
        let db = Database::open_in_memory().unwrap();
        let map = SeatMap::new();

        BookPlan::new(options("1A"))
            .build_plan(&map, db.connection())
            .unwrap();

        assert_eq!(Database::count_bookings(db.connection()).unwrap(), 0);
    }

    #[test]
    fn test_storage_seat_rejected() {
        let db = Database::open_in_memory().unwrap();
        let map = SeatMap::new();

        let err = BookPlan::new(options("77D"))
            .build_plan(&map, db.connection())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::SeatNotFree {
                status: SeatStatus::Storage,
                ..
            }
        ));
    }

    #[test]
    fn test_reserved_seat_rejected() {
        let db = Database::open_in_memory().unwrap();
        let mut map = SeatMap::new();
        map.set_status("5C".parse().unwrap(), SeatStatus::Reserved);

        let err = BookPlan::new(options("5C"))
            .build_plan(&map, db.connection())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::SeatNotFree {
                status: SeatStatus::Reserved,
                ..
            }
        ));
    }
}
