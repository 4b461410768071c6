//! Free seat listing.

use std::fmt;

use serde::Serialize;

use crate::seat::{SeatCode, SeatMap};

/// Free seats in row then column order, with their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableSeats {
    /// Number of free seats.
    pub count: usize,
    /// The free seats.
    pub seats: Vec<SeatCode>,
}

impl fmt::Display for AvailableSeats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} seats available", self.count)?;
        if self.seats.is_empty() {
            return write!(f, "None");
        }
        let codes: Vec<String> = self.seats.iter().map(ToString::to_string).collect();
        write!(f, "{}", codes.join(", "))
    }
}

/// Lists the free seats, recomputed from the map on every call.
///
/// # Examples
///
/// ```
/// use seatbook::operations::list_available;
/// use seatbook::SeatMap;
///
/// let available = list_available(&SeatMap::new());
/// assert_eq!(available.count, 474);
/// ```
#[must_use]
pub fn list_available(map: &SeatMap) -> AvailableSeats {
    let seats = map.list_free();
    AvailableSeats {
        count: seats.len(),
        seats,
    }
}
