//! Bookings command implementation.
//!
//! This module implements the `bookings` command, which displays stored
//! bookings in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{open_cabin, GlobalOptions};
use clap::Args;
use seatbook::{Booking, OutputFormat};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["seat", "reference", "passport", "first_name", "last_name"];

/// List stored bookings.
#[derive(Args)]
pub struct BookingsCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl BookingsCommand {
    /// Execute the bookings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cabin = open_cabin(global)?;
        let bookings = cabin.bookings()?;

        let format = self
            .format
            .or(global.config.output_format)
            .unwrap_or_default();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match format {
            OutputFormat::Table => format_as_table(&mut handle, &bookings)?,
            OutputFormat::Json => format_as_json(&mut handle, &bookings)?,
            OutputFormat::Csv => format_as_delimited(&mut handle, &bookings, b',')?,
            OutputFormat::Tsv => format_as_delimited(&mut handle, &bookings, b'\t')?,
        }

        Ok(())
    }
}

fn record(booking: &Booking) -> [String; 5] {
    let passenger = booking.passenger();
    [
        booking.seat().to_string(),
        booking.reference().to_string(),
        passenger.passport().to_string(),
        passenger.first_name().to_string(),
        passenger.last_name().to_string(),
    ]
}

/// Format bookings as a human-readable table.
fn format_as_table(out: &mut impl Write, bookings: &[Booking]) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for booking in bookings {
        writeln!(out, "{}", record(booking).join("\t"))?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(out: &mut impl Write, bookings: &[Booking]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, bookings)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format bookings as delimited output (CSV or TSV).
fn format_as_delimited(
    out: &mut impl Write,
    bookings: &[Booking],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for booking in bookings {
        writer.write_record(record(booking)).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatbook::{Passenger, Reference};

    fn sample() -> Vec<Booking> {
        vec![Booking::new(
            Reference::parse("AB12CD34").unwrap(),
            Passenger::new("X123", "Ada", "Lovelace").unwrap(),
            "12B".parse().unwrap(),
        )]
    }

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        format_as_table(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "SEAT\tREFERENCE\tPASSPORT\tFIRST_NAME\tLAST_NAME\n12B\tAB12CD34\tX123\tAda\tLovelace\n"
        );
    }

    #[test]
    fn test_csv_output() {
        let mut out = Vec::new();
        format_as_delimited(&mut out, &sample(), b',').unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "seat,reference,passport,first_name,last_name\n12B,AB12CD34,X123,Ada,Lovelace\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        format_as_json(&mut out, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["reference"], "AB12CD34");
        assert_eq!(value[0]["seat"], "12B");
    }
}
