//! Database CRUD operations for bookings.
//!
//! Read and write helpers take a `&Connection` so they run the same way on
//! a plain connection or inside an open transaction.

use std::collections::HashSet;

use rand::Rng;
use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::booking::{Booking, Passenger};
use crate::error::{Error, Result};
use crate::reference::{self, Reference};
use crate::seat::SeatCode;

use super::connection::Database;
use super::schema::{DELETE_BOOKINGS_BY_SEAT, INSERT_BOOKING};

const SELECT_REFERENCES: &str = "SELECT reference FROM bookings";

const SELECT_BOOKING: &str = r"
    SELECT reference, passport, first_name, last_name, seat_row, seat_column
    FROM bookings
    WHERE reference = ?
";

const SELECT_BOOKING_BY_SEAT: &str = r"
    SELECT reference, passport, first_name, last_name, seat_row, seat_column
    FROM bookings
    WHERE seat_row = ? AND seat_column = ?
";

const LIST_BOOKINGS: &str = r"
    SELECT reference, passport, first_name, last_name, seat_row, seat_column
    FROM bookings
    ORDER BY seat_row, seat_column, reference
";

const COUNT_BOOKINGS: &str = "SELECT COUNT(*) FROM bookings";

const SELECT_RESERVED_SEATS: &str = r"
    SELECT DISTINCT seat_row, seat_column
    FROM bookings
    ORDER BY seat_row, seat_column
";

fn conversion_error(index: usize, err: Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err))
}

fn row_to_seat(row: &rusqlite::Row<'_>, first: usize) -> rusqlite::Result<SeatCode> {
    let seat_row: i64 = row.get(first)?;
    let seat_column: String = row.get(first + 1)?;
    SeatCode::from_parts(seat_row, &seat_column).map_err(|e| conversion_error(first, e))
}

/// Deserializes a booking from a row.
///
/// Expects fields in this order: reference, passport, `first_name`,
/// `last_name`, `seat_row`, `seat_column`.
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let reference: String = row.get(0)?;
    let passport: String = row.get(1)?;
    let first_name: String = row.get(2)?;
    let last_name: String = row.get(3)?;

    let reference = Reference::parse(reference).map_err(|e| conversion_error(0, e))?;
    let passenger = Passenger::new(passport, first_name, last_name)
        .map_err(|e| conversion_error(1, e.into()))?;
    let seat = row_to_seat(row, 4)?;

    Ok(Booking::new(reference, passenger, seat))
}

fn seat_params(seat: SeatCode) -> (u8, String) {
    (seat.row().value(), seat.column().to_string())
}

impl Database {
    /// Returns every reference currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn existing_references(conn: &Connection) -> Result<HashSet<String>> {
        let mut stmt = conn.prepare(SELECT_REFERENCES)?;
        let references = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<HashSet<_>>>()?;
        Ok(references)
    }

    /// Generates a reference that is not yet stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored references cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let reference = Database::generate_reference(db.connection()).unwrap();
    /// assert_eq!(reference.as_str().len(), 8);
    /// ```
    pub fn generate_reference(conn: &Connection) -> Result<Reference> {
        Self::generate_reference_with(conn, &mut rand::thread_rng())
    }

    /// Generates an unused reference with the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored references cannot be read.
    pub fn generate_reference_with<R: Rng + ?Sized>(
        conn: &Connection,
        rng: &mut R,
    ) -> Result<Reference> {
        let existing = Self::existing_references(conn)?;
        Ok(reference::generate_unique(rng, &existing))
    }

    /// Inserts a booking.
    ///
    /// Existing bookings are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReference`] if the reference is already
    /// stored, or a database error if the insert fails for another reason.
    pub fn insert_booking(conn: &Connection, booking: &Booking) -> Result<()> {
        let (seat_row, seat_column) = seat_params(booking.seat());
        let passenger = booking.passenger();

        let result = conn.execute(
            INSERT_BOOKING,
            params![
                booking.reference().as_str(),
                passenger.passport(),
                passenger.first_name(),
                passenger.last_name(),
                seat_row,
                seat_column,
            ],
        );

        match result {
            Ok(_) => {
                log::debug!("stored booking {booking}");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(ref sqlite_err, _))
                if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                Err(Error::DuplicateReference {
                    reference: booking.reference().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes every booking for a seat.
    ///
    /// Returns the number of bookings removed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_by_seat(conn: &Connection, seat: SeatCode) -> Result<usize> {
        let (seat_row, seat_column) = seat_params(seat);
        let deleted = conn.execute(DELETE_BOOKINGS_BY_SEAT, params![seat_row, seat_column])?;
        log::debug!("deleted {deleted} booking(s) for seat {seat}");
        Ok(deleted)
    }

    /// Looks up a booking by reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_booking(conn: &Connection, reference: &Reference) -> Result<Option<Booking>> {
        match conn.query_row(SELECT_BOOKING, [reference.as_str()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up the booking for a seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_booking_by_seat(conn: &Connection, seat: SeatCode) -> Result<Option<Booking>> {
        let (seat_row, seat_column) = seat_params(seat);
        match conn.query_row(
            SELECT_BOOKING_BY_SEAT,
            params![seat_row, seat_column],
            row_to_booking,
        ) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all bookings ordered by seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(LIST_BOOKINGS)?;
        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(conn: &Connection) -> Result<usize> {
        let count: i64 = conn.query_row(COUNT_BOOKINGS, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Returns every seat that has at least one booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored seat is malformed.
    pub fn reserved_seats(conn: &Connection) -> Result<Vec<SeatCode>> {
        let mut stmt = conn.prepare(SELECT_RESERVED_SEATS)?;
        let seats = stmt
            .query_map([], |row| row_to_seat(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(seats)
    }
}
