//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to the reservation store and the seat map.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reference::Reference;
use crate::seat::{SeatMap, SeatStatus};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan and from execution.
    pub warnings: Vec<String>,

    /// The reference of the stored booking (if applicable).
    pub reference: Option<Reference>,

    /// Number of booking records deleted.
    pub deleted: usize,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reference: plan.reference().cloned(),
            deleted: 0,
        }
    }
}

/// Executes operation plans against the store and the seat map.
///
/// All store actions of a plan run in one IMMEDIATE transaction. Seat map
/// actions are applied only after that transaction commits, so a failed
/// store write leaves the map untouched.
///
/// # Examples
///
/// ```
/// use seatbook::operations::{BookOptions, BookPlan, PlanExecutor};
/// use seatbook::{Database, Passenger, SeatMap, SeatStatus};
///
/// let mut db = Database::open_in_memory().unwrap();
/// let mut map = SeatMap::new();
/// let seat = "1A".parse().unwrap();
/// let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
///
/// let plan = BookPlan::new(BookOptions::new(seat, passenger))
///     .build_plan(&map, db.connection())
///     .unwrap();
///
/// // Dry-run execution
/// let result = PlanExecutor::new(&mut db, &mut map).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert_eq!(map.status_of(seat), SeatStatus::Free);
///
/// // Normal execution
/// let result = PlanExecutor::new(&mut db, &mut map).execute(&plan).unwrap();
/// assert!(result.reference.is_some());
/// assert_eq!(map.status_of(seat), SeatStatus::Reserved);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    map: &'a mut SeatMap,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(db: &'a mut Database, map: &'a mut SeatMap) -> Self {
        Self {
            db,
            map,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan's actions but does
    /// not modify the store or the seat map.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// if any store action fails, or if the store already holds a booking
    /// for the seat being booked.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::from_plan(plan, self.dry_run);
        if self.dry_run {
            return Ok(result);
        }

        self.db.with_transaction(|tx| {
            for action in plan.actions.iter().filter(|a| a.is_store_action()) {
                match action {
                    PlanAction::InsertBooking(booking) => {
                        // Another process may have booked the seat since this map was loaded
                        if Database::get_booking_by_seat(tx, booking.seat())?.is_some() {
                            return Err(Error::SeatNotFree {
                                seat: booking.seat(),
                                status: SeatStatus::Reserved,
                            });
                        }
                        Database::insert_booking(tx, booking)?;
                    }
                    PlanAction::DeleteBookings(seat) => {
                        let deleted = Database::delete_by_seat(tx, *seat)?;
                        if deleted == 0 {
                            result
                                .warnings
                                .push(format!("No stored booking found for seat {seat}"));
                        }
                        result.deleted += deleted;
                    }
                    PlanAction::MarkSeat { .. } => {}
                }
                log::debug!("{}", action.description());
            }
            Ok(())
        })?;

        for action in &plan.actions {
            if let PlanAction::MarkSeat { seat, status } = action {
                self.map.set_status(*seat, *status);
                log::debug!("{}", action.description());
            }
        }

        Ok(result)
    }
}
