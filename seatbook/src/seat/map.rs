//! The in-memory seat table.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{Error, Result};

use super::{Column, Row, SeatCode, SeatStatus};

/// Legend printed above the rendered seat map.
pub const LEGEND: &str = "=== Seat Map (F = Free, R = Reserved, X = Aisle, S = Storage) ===";

/// Column header of the rendered seat map. The wide gap is the aisle.
pub const HEADER: &str = "Row |  A  B  C  |  D  E  F";

/// Status of every seat in the cabin.
///
/// The table always holds all 480 seats; it is built once with
/// deterministic initial statuses and only `Free`/`Reserved` entries ever
/// change afterwards.
///
/// # Examples
///
/// ```
/// use seatbook::{SeatMap, SeatStatus};
///
/// let mut map = SeatMap::new();
/// let seat = "1A".parse().unwrap();
/// assert_eq!(map.status_of(seat), SeatStatus::Free);
///
/// map.set_status(seat, SeatStatus::Reserved);
/// assert_eq!(map.status_of(seat), SeatStatus::Reserved);
/// assert_eq!(map.list_free().len(), 473);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    seats: BTreeMap<SeatCode, SeatStatus>,
}

impl SeatMap {
    /// Builds the cabin with every seat in its initial status.
    #[must_use]
    pub fn new() -> Self {
        let seats = SeatCode::all()
            .map(|seat| (seat, seat.initial_status()))
            .collect();
        Self { seats }
    }

    /// Returns the current status of a seat.
    #[must_use]
    pub fn status_of(&self, seat: SeatCode) -> SeatStatus {
        // Every valid SeatCode is present from construction onwards.
        self.seats
            .get(&seat)
            .copied()
            .unwrap_or_else(|| seat.initial_status())
    }

    /// Overwrites the status of a seat.
    ///
    /// This is an unconditional write. Callers are responsible for only
    /// moving seats between `Free` and `Reserved`.
    pub fn set_status(&mut self, seat: SeatCode, status: SeatStatus) {
        self.seats.insert(seat, status);
    }

    /// Returns all free seats, ordered by row then column.
    #[must_use]
    pub fn list_free(&self) -> Vec<SeatCode> {
        self.seats
            .iter()
            .filter(|(_, status)| **status == SeatStatus::Free)
            .map(|(seat, _)| *seat)
            .collect()
    }

    /// Counts the seats currently in the given status.
    #[must_use]
    pub fn count_by_status(&self, status: SeatStatus) -> usize {
        self.seats.values().filter(|s| **s == status).count()
    }

    /// Iterates over every seat and its status, in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatCode, SeatStatus)> + '_ {
        self.seats.iter().map(|(seat, status)| (*seat, *status))
    }

    /// Total number of seats in the cabin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Always `false`: the cabin is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Marks the given seats as reserved.
    ///
    /// Used at startup to rebuild seat state from stored bookings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatNotFree`] if a seat is an aisle or storage seat,
    /// which means the store holds a booking that can never be valid. No
    /// seat is changed in that case.
    pub fn apply_bookings(&mut self, seats: impl IntoIterator<Item = SeatCode>) -> Result<()> {
        let seats: Vec<SeatCode> = seats.into_iter().collect();

        if let Some(seat) = seats.iter().find(|seat| self.status_of(**seat).is_fixed()) {
            return Err(Error::SeatNotFree {
                seat: *seat,
                status: self.status_of(*seat),
            });
        }

        for seat in seats {
            self.set_status(seat, SeatStatus::Reserved);
        }
        Ok(())
    }

    /// Renders the seat map as text.
    ///
    /// The output is a legend line, a header, a separator, and one line per
    /// row in a 3+3 layout with the aisle gap between C and D.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{LEGEND}");
        let _ = writeln!(out, "{HEADER}");
        let _ = writeln!(out, "{}", "-".repeat(HEADER.len()));

        for row in Row::all() {
            let side = |left: bool| {
                Column::ALL
                    .iter()
                    .filter(|column| column.is_left_of_aisle() == left)
                    .map(|column| {
                        self.status_of(SeatCode::new(row, *column))
                            .symbol()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
            };
            let _ = writeln!(out, "{:>3} |  {}  |  {}", row, side(true), side(false));
        }

        out
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}
