//! Booking operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: checks the seat's status and describes the work
//! 2. **Execution**: applies store actions in one transaction, then updates
//!    the seat map
//!
//! Most callers go through [`Cabin`], which owns the seat map and the
//! store together.
//!
//! # Examples
//!
//! ```
//! use seatbook::{Cabin, Database, Passenger};
//!
//! let mut cabin = Cabin::open(Database::open_in_memory().unwrap()).unwrap();
//! let passenger = Passenger::new("X123", "Ada", "Lovelace").unwrap();
//!
//! // Generate plan
//! let plan = cabin.plan_booking("12B", passenger).unwrap();
//! println!("{}", plan.description);
//!
//! // Execute plan
//! let result = cabin.execute(&plan, false).unwrap();
//! assert!(result.reference.is_some());
//! ```

pub mod book;
pub mod cabin;
pub mod check;
pub mod executor;
pub mod free;
pub mod list;
pub mod plan;

#[cfg(test)]
mod proptests;

pub use book::{BookOptions, BookPlan};
pub use cabin::Cabin;
pub use check::{check_seat, SeatCheck};
pub use executor::{ExecutionResult, PlanExecutor};
pub use free::FreePlan;
pub use list::{list_available, AvailableSeats};
pub use plan::{OperationPlan, PlanAction};
