//! Property-based tests for the booking workflow.

use proptest::prelude::*;

use crate::database::Database;
use crate::seat::{SeatCode, SeatStatus};
use crate::{Cabin, Passenger};

#[derive(Debug, Clone)]
enum Step {
    Book(usize),
    Free(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    // A small seat window so books and frees collide often
    prop_oneof![
        (0usize..12).prop_map(Step::Book),
        (0usize..12).prop_map(Step::Free),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Reserved seats and stored bookings stay in one-to-one correspondence
    #[test]
    fn store_and_map_stay_consistent(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut cabin = Cabin::open(Database::open_in_memory().unwrap()).unwrap();
        let seats: Vec<SeatCode> = SeatCode::all().collect();
        let passenger = Passenger::new("X1", "Ada", "Lovelace").unwrap();

        for step in steps {
            match step {
                Step::Book(i) => {
                    let code = seats[i].to_string();
                    let was_free = cabin.seat_map().status_of(seats[i]) == SeatStatus::Free;
                    prop_assert_eq!(cabin.book_seat(&code, passenger.clone()).is_ok(), was_free);
                }
                Step::Free(i) => {
                    let code = seats[i].to_string();
                    let was_reserved = cabin.seat_map().status_of(seats[i]) == SeatStatus::Reserved;
                    prop_assert_eq!(cabin.free_seat(&code).is_ok(), was_reserved);
                }
            }

            let reserved = cabin.seat_map().count_by_status(SeatStatus::Reserved);
            let stored = Database::reserved_seats(cabin.database().connection()).unwrap();
            prop_assert_eq!(stored.len(), reserved);
            prop_assert!(stored
                .iter()
                .all(|s| cabin.seat_map().status_of(*s) == SeatStatus::Reserved));
            prop_assert_eq!(cabin.list_available().count, 474 - reserved);
        }
    }
}
