//! The cabin: one seat map and the store that backs it.

use crate::booking::{Booking, Passenger};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reference::Reference;
use crate::seat::{parse_code, SeatMap};

use super::book::{BookOptions, BookPlan};
use super::check::{check_seat, SeatCheck};
use super::executor::{ExecutionResult, PlanExecutor};
use super::free::FreePlan;
use super::list::{list_available, AvailableSeats};
use super::plan::OperationPlan;

/// Owns the seat map and the reservation store for one session.
///
/// Opening a cabin re-derives Reserved seats from the stored bookings, so
/// the map and the store start out consistent and every book or free keeps
/// them that way.
///
/// # Examples
///
/// ```
/// use seatbook::{Cabin, Database, Passenger, SeatStatus};
///
/// let mut cabin = Cabin::open(Database::open_in_memory().unwrap()).unwrap();
/// let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
///
/// let reference = cabin.book_seat("1a", passenger).unwrap();
/// assert_eq!(reference.as_str().len(), 8);
/// assert_eq!(cabin.seat_map().status_of("1A".parse().unwrap()), SeatStatus::Reserved);
///
/// assert_eq!(cabin.free_seat("1A").unwrap(), 1);
/// assert_eq!(cabin.list_available().count, 474);
/// ```
#[derive(Debug)]
pub struct Cabin {
    map: SeatMap,
    db: Database,
}

impl Cabin {
    /// Builds the seat map and marks every stored booking's seat Reserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the bookings cannot be read, or
    /// [`Error::SeatNotFree`] if a stored booking sits on a seat that can
    /// never be booked.
    pub fn open(db: Database) -> Result<Self> {
        let reserved = Database::reserved_seats(db.connection())?;
        let mut map = SeatMap::new();
        log::debug!("restoring {} reserved seats", reserved.len());
        map.apply_bookings(reserved)?;
        Ok(Self { map, db })
    }

    /// Reports the availability of the seat named by `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatCode`] if the code is malformed.
    pub fn check_seat(&self, code: &str) -> Result<SeatCheck> {
        check_seat(&self.map, code)
    }

    /// Plans a booking without executing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed, the seat is not Free, or
    /// the store cannot be read.
    pub fn plan_booking(&self, code: &str, passenger: Passenger) -> Result<OperationPlan> {
        let seat = parse_code(code)?;
        BookPlan::new(BookOptions::new(seat, passenger)).build_plan(&self.map, self.db.connection())
    }

    /// Plans releasing a seat without executing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed or the seat is not Reserved.
    pub fn plan_release(&self, code: &str) -> Result<OperationPlan> {
        FreePlan::new(parse_code(code)?).build_plan(&self.map)
    }

    /// Executes a plan against this cabin.
    ///
    /// # Errors
    ///
    /// Returns an error if execution fails; the seat map is unchanged then.
    pub fn execute(&mut self, plan: &OperationPlan, dry_run: bool) -> Result<ExecutionResult> {
        let mut executor = PlanExecutor::new(&mut self.db, &mut self.map);
        if dry_run {
            executor = executor.dry_run();
        }
        executor.execute(plan)
    }

    /// Books the seat named by `code` and returns the new reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatCode`] for a malformed code,
    /// [`Error::SeatNotFree`] unless the seat is Free, or a store error. On
    /// any error the seat keeps its status and nothing is stored.
    pub fn book_seat(&mut self, code: &str, passenger: Passenger) -> Result<Reference> {
        let plan = self.plan_booking(code, passenger)?;
        let result = self.execute(&plan, false)?;
        result.reference.ok_or_else(|| Error::NotFound {
            resource: format!("reference for {}", plan.description),
        })
    }

    /// Frees the seat named by `code` and returns how many records were removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatCode`] for a malformed code,
    /// [`Error::SeatNotReserved`] unless the seat is Reserved, or a store
    /// error.
    pub fn free_seat(&mut self, code: &str) -> Result<usize> {
        let plan = self.plan_release(code)?;
        Ok(self.execute(&plan, false)?.deleted)
    }

    /// Lists the free seats.
    #[must_use]
    pub fn list_available(&self) -> AvailableSeats {
        list_available(&self.map)
    }

    /// Renders the seat map.
    #[must_use]
    pub fn render(&self) -> String {
        self.map.render()
    }

    /// Returns every stored booking ordered by seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings(&self) -> Result<Vec<Booking>> {
        Database::list_bookings(self.db.connection())
    }

    /// Looks up the booking holding the seat named by `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed or the query fails.
    pub fn booking_for(&self, code: &str) -> Result<Option<Booking>> {
        Database::get_booking_by_seat(self.db.connection(), parse_code(code)?)
    }

    /// Returns the seat map.
    #[must_use]
    pub const fn seat_map(&self) -> &SeatMap {
        &self.map
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }
}
