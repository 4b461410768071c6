//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::booking::Booking;
use crate::reference::Reference;
use crate::seat::{SeatCode, SeatStatus};

/// A single action to be taken during plan execution.
///
/// Store actions run inside one database transaction; seat map actions are
/// applied only after that transaction commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Store a new booking record.
    InsertBooking(Booking),

    /// Remove every booking record for a seat.
    DeleteBookings(SeatCode),

    /// Set a seat's status in the seat map.
    MarkSeat {
        /// The seat to update.
        seat: SeatCode,
        /// The new status.
        status: SeatStatus,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertBooking(booking) => format!(
                "Store booking {} for seat {}",
                booking.reference(),
                booking.seat()
            ),
            Self::DeleteBookings(seat) => format!("Delete bookings for seat {seat}"),
            Self::MarkSeat { seat, status } => format!("Mark seat {seat} as {status}"),
        }
    }

    /// Returns true if this action writes to the reservation store.
    #[must_use]
    pub const fn is_store_action(&self) -> bool {
        matches!(self, Self::InsertBooking(_) | Self::DeleteBookings(_))
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book seat 12B");
    /// assert_eq!(plan.description, "Book seat 12B");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns true if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns the reference of the booking this plan stores, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::InsertBooking(booking) => Some(booking.reference()),
            _ => None,
        })
    }
}
