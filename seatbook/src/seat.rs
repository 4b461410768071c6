//! Seat coordinate and status types for the cabin.
//!
//! This module provides the validated seat coordinate types ([`Row`],
//! [`Column`], [`SeatCode`]), the [`SeatStatus`] enum, and the in-memory
//! [`SeatMap`] that tracks the status of every seat.

pub mod map;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use map::SeatMap;

/// Rows whose D/E/F seats are permanently used for storage.
pub const STORAGE_ROWS: [u8; 2] = [77, 78];

/// Columns that are used for storage on the storage rows.
pub const STORAGE_COLUMNS: [Column; 3] = [Column::D, Column::E, Column::F];

/// A valid cabin row number (1-80).
///
/// # Examples
///
/// ```
/// use seatbook::Row;
///
/// let row = Row::try_from(12).unwrap();
/// assert_eq!(row.value(), 12);
///
/// assert!(Row::try_from(0).is_err());
/// assert!(Row::try_from(81).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Row(u8);

impl Row {
    /// The first row of the cabin.
    pub const MIN: u8 = 1;

    /// The last row of the cabin.
    pub const MAX: u8 = 80;

    /// Returns the underlying row number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns an iterator over every row, front to back.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u16> for Row {
    type Error = InvalidRowError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(row) if (Self::MIN..=Self::MAX).contains(&row) => Ok(Self(row)),
            _ => Err(InvalidRowError { value }),
        }
    }
}

impl From<Row> for u16 {
    fn from(row: Row) -> Self {
        Self::from(row.0)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width and alignment flags apply
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error type for row numbers outside the cabin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRowError {
    /// The rejected row number.
    pub value: u16,
}

impl fmt::Display for InvalidRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} is outside {}-{}",
            self.value,
            Row::MIN,
            Row::MAX
        )
    }
}

impl std::error::Error for InvalidRowError {}

/// A seat column (A-F). The aisle runs between C and D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Window seat, left side.
    A,
    /// Middle seat, left side.
    B,
    /// Aisle seat, left side.
    C,
    /// Aisle seat, right side.
    D,
    /// Middle seat, right side.
    E,
    /// Window seat, right side.
    F,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Parses a column letter, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Column;
    ///
    /// assert_eq!(Column::from_char('b'), Some(Column::B));
    /// assert_eq!(Column::from_char('G'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            _ => None,
        }
    }

    /// Returns the uppercase column letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// Returns `true` for the three columns left of the aisle.
    #[must_use]
    pub const fn is_left_of_aisle(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A seat coordinate: row and column.
///
/// Seat codes order by row first, then column, which is the order used for
/// every listing.
///
/// # Examples
///
/// ```
/// use seatbook::{Column, SeatCode};
///
/// let seat: SeatCode = "12b".parse().unwrap();
/// assert_eq!(seat.row().value(), 12);
/// assert_eq!(seat.column(), Column::B);
/// assert_eq!(seat.to_string(), "12B");
///
/// assert!("B12".parse::<SeatCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatCode {
    row: Row,
    column: Column,
}

impl SeatCode {
    /// Creates a seat code from an already validated row and column.
    #[must_use]
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Builds a seat code from raw parts, as stored in the database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatCode`] if the row is outside the cabin or
    /// the column is not a single letter A-F.
    pub fn from_parts(row: i64, column: &str) -> Result<Self> {
        let code = format!("{row}{column}");
        let row = u16::try_from(row)
            .ok()
            .and_then(|value| Row::try_from(value).ok())
            .ok_or_else(|| invalid(&code, format!("row must be {}-{}", Row::MIN, Row::MAX)))?;

        let mut chars = column.chars();
        let column = match (chars.next(), chars.next()) {
            (Some(c), None) => Column::from_char(c),
            _ => None,
        }
        .ok_or_else(|| invalid(&code, "column must be a letter A-F"))?;

        Ok(Self { row, column })
    }

    /// Returns the row.
    #[must_use]
    pub const fn row(self) -> Row {
        self.row
    }

    /// Returns the column.
    #[must_use]
    pub const fn column(self) -> Column {
        self.column
    }

    /// Returns the status this seat has when the cabin is first laid out.
    #[must_use]
    pub fn initial_status(self) -> SeatStatus {
        if STORAGE_ROWS.contains(&self.row.value()) && STORAGE_COLUMNS.contains(&self.column) {
            SeatStatus::Storage
        } else {
            SeatStatus::Free
        }
    }

    /// Returns an iterator over every seat in the cabin, in listing order.
    pub fn all() -> impl Iterator<Item = Self> {
        Row::all().flat_map(|row| Column::ALL.into_iter().map(move |column| Self { row, column }))
    }
}

/// Parses a seat code such as `"12B"`.
///
/// The accepted grammar is one or more ASCII digits followed by exactly one
/// column letter, with optional surrounding whitespace. Anything else is
/// rejected rather than filtered.
///
/// # Errors
///
/// Returns [`Error::InvalidSeatCode`] if the text does not match the grammar,
/// the row is outside 1-80, or the column is not A-F.
///
/// # Examples
///
/// ```
/// use seatbook::seat::parse_code;
///
/// let seat = parse_code(" 80f ").unwrap();
/// assert_eq!(seat.to_string(), "80F");
///
/// assert!(parse_code("0A").is_err());
/// assert!(parse_code("81A").is_err());
/// assert!(parse_code("12G").is_err());
/// assert!(parse_code("12").is_err());
/// ```
pub fn parse_code(code: &str) -> Result<SeatCode> {
    let trimmed = code.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, letters) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(invalid(code, "expected row digits followed by a column letter"));
    }

    let mut letter_chars = letters.chars();
    let letter = match (letter_chars.next(), letter_chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c,
        (None, _) => return Err(invalid(code, "missing column letter")),
        _ => {
            return Err(invalid(
                code,
                "expected row digits followed by a single column letter",
            ))
        }
    };

    let row = digits
        .parse::<u16>()
        .ok()
        .and_then(|value| Row::try_from(value).ok())
        .ok_or_else(|| invalid(code, format!("row must be {}-{}", Row::MIN, Row::MAX)))?;

    let column =
        Column::from_char(letter).ok_or_else(|| invalid(code, "column must be A-F"))?;

    Ok(SeatCode { row, column })
}

fn invalid(code: &str, reason: impl Into<String>) -> Error {
    Error::InvalidSeatCode {
        code: code.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for SeatCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_code(s)
    }
}

impl TryFrom<String> for SeatCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        parse_code(&value)
    }
}

impl From<SeatCode> for String {
    fn from(seat: SeatCode) -> Self {
        seat.to_string()
    }
}

impl fmt::Display for SeatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

/// The status of a single seat.
///
/// Only `Free` and `Reserved` ever change; `Aisle` and `Storage` seats are
/// fixed for the lifetime of the cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// The seat can be booked.
    Free,
    /// The seat has a booking.
    Reserved,
    /// Not a seat: part of the aisle.
    Aisle,
    /// Not a seat: used for storage.
    Storage,
}

impl SeatStatus {
    /// Returns the single-letter symbol used on the rendered seat map.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => 'F',
            Self::Reserved => 'R',
            Self::Aisle => 'X',
            Self::Storage => 'S',
        }
    }

    /// Returns `true` for statuses that can never be booked.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Aisle | Self::Storage)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Reserved => write!(f, "reserved"),
            Self::Aisle => write!(f, "aisle"),
            Self::Storage => write!(f, "storage"),
        }
    }
}
