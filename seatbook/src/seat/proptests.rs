//! Property-based tests for seat code parsing and the seat map.

use super::{parse_code, Column, SeatCode, SeatMap, SeatStatus};
use proptest::prelude::*;

fn column_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F'])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every valid code parses back to its parts regardless of letter case
    #[test]
    fn parse_roundtrip_any_case(row in 1u16..=80, col in column_strategy(), lower in any::<bool>()) {
        let letter = if lower { col.to_ascii_lowercase() } else { col };
        let seat = parse_code(&format!("{row}{letter}")).unwrap();

        prop_assert_eq!(u16::from(seat.row()), row);
        prop_assert_eq!(seat.column().as_char(), col);
        prop_assert_eq!(seat.to_string(), format!("{row}{col}"));
    }

    // Rows outside the cabin are always rejected
    #[test]
    fn parse_rejects_rows_out_of_range(row in 81u32..100_000, col in column_strategy()) {
        let code = format!("{row}{col}");
        let rejected = parse_code(&code).is_err();
        prop_assert!(rejected, "{} should be rejected", code);
    }

    // Letters past F are always rejected
    #[test]
    fn parse_rejects_columns_past_f(row in 1u16..=80, letter in "[G-Zg-z]") {
        let code = format!("{row}{letter}");
        let rejected = parse_code(&code).is_err();
        prop_assert!(rejected, "{} should be rejected", code);
    }

    // Letter-first codes never parse
    #[test]
    fn parse_rejects_letter_first(row in 1u16..=80, col in column_strategy()) {
        let code = format!("{col}{row}");
        let rejected = parse_code(&code).is_err();
        prop_assert!(rejected, "{} should be rejected", code);
    }

    // Arbitrary text either parses into a code that prints back canonically or fails
    #[test]
    fn parse_never_panics(text in ".{0,12}") {
        if let Ok(seat) = parse_code(&text) {
            prop_assert_eq!(parse_code(&seat.to_string()).unwrap(), seat);
        }
    }

    // Reserving any set of bookable seats removes exactly those from the free list
    #[test]
    fn reserved_seats_leave_free_list(indices in prop::collection::btree_set(0usize..480, 0..40)) {
        let mut map = SeatMap::new();
        let all: Vec<SeatCode> = SeatCode::all().collect();
        let mut reserved = 0;

        for i in &indices {
            let seat = all[*i];
            if map.status_of(seat) == SeatStatus::Free {
                map.set_status(seat, SeatStatus::Reserved);
                reserved += 1;
            }
        }

        let free = map.list_free();
        prop_assert_eq!(free.len(), 474 - reserved);
        prop_assert!(free.iter().all(|s| map.status_of(*s) == SeatStatus::Free));
        prop_assert_eq!(map.count_by_status(SeatStatus::Storage), 6);
    }
}

#[test]
fn every_column_letter_is_known() {
    for column in Column::ALL {
        assert_eq!(Column::from_char(column.as_char()), Some(column));
        assert_eq!(
            Column::from_char(column.as_char().to_ascii_lowercase()),
            Some(column)
        );
    }
}
