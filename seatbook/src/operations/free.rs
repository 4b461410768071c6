//! Free operation planning.

use crate::error::{Error, Result};
use crate::seat::{SeatCode, SeatMap, SeatStatus};

use super::plan::{OperationPlan, PlanAction};

/// A free plan generator.
///
/// # Examples
///
/// ```
/// use seatbook::operations::FreePlan;
/// use seatbook::{SeatMap, SeatStatus};
///
/// let mut map = SeatMap::new();
/// let seat = "1A".parse().unwrap();
/// map.set_status(seat, SeatStatus::Reserved);
///
/// let plan = FreePlan::new(seat).build_plan(&map).unwrap();
/// assert_eq!(plan.len(), 2);
/// ```
pub struct FreePlan {
    seat: SeatCode,
}

impl FreePlan {
    /// Creates a free plan for a seat.
    #[must_use]
    pub const fn new(seat: SeatCode) -> Self {
        Self { seat }
    }

    /// Builds an operation plan that releases the seat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatNotReserved`] unless the seat is Reserved.
    pub fn build_plan(&self, map: &SeatMap) -> Result<OperationPlan> {
        let seat = self.seat;
        let status = map.status_of(seat);
        if status != SeatStatus::Reserved {
            return Err(Error::SeatNotReserved { seat, status });
        }

        Ok(OperationPlan::new(format!("Free seat {seat}"))
            .add_action(PlanAction::DeleteBookings(seat))
            .add_action(PlanAction::MarkSeat {
                seat,
                status: SeatStatus::Free,
            }))
    }
}
