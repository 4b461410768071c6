//! Interactive menu.
//!
//! The menu reads numbered choices from any `BufRead` and writes to any
//! `Write`, so the same loop drives a terminal session and scripted input.
//! Errors from an action are printed and the menu continues; end of input
//! exits like choice 6.

use crate::error::CliError;
use crate::utils::{open_cabin, GlobalOptions};
use clap::Args;
use seatbook::{Cabin, Error, Passenger, SeatCheck};
use std::io::{self, BufRead, Write};

/// Menu text printed before every prompt.
pub const MENU_TEXT: &str = "\
=== Seat Booking Menu ===
1. Check seat availability
2. Book a seat
3. Free a seat
4. Show seat map
5. List available seats
6. Exit";

/// Run the interactive booking menu.
#[derive(Args)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cabin = open_cabin(global)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&mut cabin, stdin.lock(), stdout.lock()).run()?;

        Ok(())
    }
}

enum Step {
    Continue,
    Exit,
}

/// A menu session over one cabin.
pub struct Menu<'a, R, W> {
    cabin: &'a mut Cabin,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a menu reading from `input` and writing to `output`.
    pub fn new(cabin: &'a mut Cabin, input: R, output: W) -> Self {
        Self {
            cabin,
            input,
            output,
        }
    }

    /// Runs until the user picks 6 or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU_TEXT}")?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let step = match choice.as_str() {
                "1" => self.check()?,
                "2" => self.book()?,
                "3" => self.free()?,
                "4" => {
                    write!(self.output, "{}", self.cabin.render())?;
                    Step::Continue
                }
                "5" => {
                    writeln!(self.output, "{}", self.cabin.list_available())?;
                    Step::Continue
                }
                "6" => Step::Exit,
                other => {
                    writeln!(
                        self.output,
                        "Invalid choice '{other}', enter a number from 1 to 6."
                    )?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                writeln!(self.output, "Goodbye.")?;
                return Ok(());
            }
        }
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &Error) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }

    fn check(&mut self) -> io::Result<Step> {
        let Some(code) = self.prompt("Enter seat code (e.g. 12B): ")? else {
            return Ok(Step::Exit);
        };

        match self.cabin.check_seat(&code) {
            Ok(check) => writeln!(self.output, "{check}")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn book(&mut self) -> io::Result<Step> {
        let Some(code) = self.prompt("Enter seat code (e.g. 12B): ")? else {
            return Ok(Step::Exit);
        };

        // Reject unbookable seats before asking for passenger details
        let seat = match self.cabin.check_seat(&code) {
            Ok(SeatCheck::Free { seat }) => seat,
            Ok(check) => {
                let err = Error::SeatNotFree {
                    seat: check.seat(),
                    status: check.status(),
                };
                self.report(&err)?;
                return Ok(Step::Continue);
            }
            Err(e) => {
                self.report(&e)?;
                return Ok(Step::Continue);
            }
        };

        let Some(passport) = self.prompt("Passport number: ")? else {
            return Ok(Step::Exit);
        };
        let Some(first_name) = self.prompt("First name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(last_name) = self.prompt("Last name: ")? else {
            return Ok(Step::Exit);
        };

        let result = Passenger::new(passport, first_name, last_name)
            .map_err(Error::from)
            .and_then(|passenger| self.cabin.book_seat(&code, passenger));
        match result {
            Ok(reference) => writeln!(
                self.output,
                "Seat {seat} booked. Booking reference: {reference}"
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn free(&mut self) -> io::Result<Step> {
        let Some(code) = self.prompt("Enter seat code (e.g. 12B): ")? else {
            return Ok(Step::Exit);
        };

        let result = seatbook::parse_code(&code)
            .and_then(|seat| self.cabin.free_seat(&code).map(|_| seat));
        match result {
            Ok(seat) => writeln!(self.output, "Seat {seat} is now free.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatbook::{Database, SeatStatus};
    use std::io::Cursor;

    fn cabin() -> Cabin {
        Cabin::open(Database::open_in_memory().unwrap()).unwrap()
    }

    fn session(cabin: &mut Cabin, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(cabin, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_choice() {
        let out = session(&mut cabin(), "6\n");
        assert!(out.contains("1. Check seat availability"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = session(&mut cabin(), "");
        assert!(out.contains("Enter choice: "));
        assert!(!out.contains("Goodbye."));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let out = session(&mut cabin(), "9\nabc\n6\n");
        assert!(out.contains("Invalid choice '9'"));
        assert!(out.contains("Invalid choice 'abc'"));
        assert_eq!(out.matches("=== Seat Booking Menu ===").count(), 3);
    }

    #[test]
    fn test_book_check_and_free() {
        let mut cabin = cabin();
        let out = session(
            &mut cabin,
            "2\n1a\nX123\nAda\nLovelace\n1\n1A\n3\n1A\n1\n1A\n6\n",
        );

        assert!(out.contains("Seat 1A booked. Booking reference: "));
        assert!(out.contains("Seat 1A is reserved"));
        assert!(out.contains("Seat 1A is now free."));
        assert!(out.contains("Seat 1A is free"));
        assert!(cabin.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_booking_persists_after_session() {
        let mut cabin = cabin();
        session(&mut cabin, "2\n12B\nP-9\nGrace\nHopper\n6\n");

        let bookings = cabin.bookings().unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].passenger().first_name(), "Grace");
        assert_eq!(
            cabin.seat_map().status_of("12B".parse().unwrap()),
            SeatStatus::Reserved
        );
    }

    #[test]
    fn test_storage_seat_rejected_before_details() {
        let out = session(&mut cabin(), "2\n77D\n6\n");
        assert!(out.contains("Error: seat 77D cannot be booked (status: storage)"));
        assert!(!out.contains("Passport number: "));
    }

    #[test]
    fn test_invalid_code_reported() {
        let out = session(&mut cabin(), "1\nB12\n6\n");
        assert!(out.contains("Error: invalid seat code 'B12'"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_free_unreserved_seat_reported() {
        let out = session(&mut cabin(), "3\n5C\n6\n");
        assert!(out.contains("Error: seat 5C is not currently reserved"));
    }

    #[test]
    fn test_empty_passenger_field_reported() {
        let mut cabin = cabin();
        let out = session(&mut cabin, "2\n4D\nX1\n \nLovelace\n6\n");
        assert!(out.contains("Error: validation error for 'first_name'"));
        assert!(cabin.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_end_of_input_mid_booking() {
        let mut cabin = cabin();
        session(&mut cabin, "2\n4D\nX1\n");
        assert!(cabin.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_map_and_available() {
        let out = session(&mut cabin(), "4\n5\n6\n");
        assert!(out.contains("=== Seat Map (F = Free, R = Reserved, X = Aisle, S = Storage) ==="));
        assert!(out.contains("474 seats available"));
    }
}
