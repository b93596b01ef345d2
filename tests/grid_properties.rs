mod common;

use chrono::{Days, NaiveDate};
use common::{d, leave};
use leaves_calendar::calendar::{CellKind, build, days_in_month, matches};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| d(1990, 1, 1) + Days::new(offset))
}

proptest! {
    #[test]
    fn grid_is_whole_weeks(year in 1i32..=9999, month in 0u32..12, start in 0u8..7) {
        let cells = build(year, month, &[], &[], start, d(2024, 1, 1)).unwrap();
        prop_assert!(!cells.is_empty());
        prop_assert_eq!(cells.len() % 7, 0);
    }

    #[test]
    fn in_bounds_days_are_consecutive(year in 1i32..=9999, month in 0u32..12, start in 0u8..7) {
        let cells = build(year, month, &[], &[], start, d(2024, 1, 1)).unwrap();
        let days: Vec<u32> = cells
            .iter()
            .filter(|c| c.kind == CellKind::InBounds)
            .map(|c| c.day_number)
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
        prop_assert_eq!(days, expected);

        // leading cells come first, trailing cells last
        let kinds: Vec<CellKind> = cells.iter().map(|c| c.kind).collect();
        let first_in = kinds.iter().position(|k| *k == CellKind::InBounds).unwrap();
        prop_assert!(first_in < 7);
        prop_assert!(kinds[..first_in].iter().all(|k| *k == CellKind::OutOfBoundsPrevious));
    }

    #[test]
    fn endpoints_are_inclusive(start in any_date(), len in 0u64..60) {
        let end = start + Days::new(len);
        prop_assert!(matches(start, start, end));
        prop_assert!(matches(end, start, end));
        prop_assert!(!matches(end + Days::new(1), start, end));
        prop_assert!(!matches(start - Days::new(1), start, end));
    }

    #[test]
    fn single_day_leave_appears_once(day in any_date(), start in 0u8..7) {
        let leaves = vec![leave("0", "Someone", day, day)];
        let month = chrono::Datelike::month0(&day);
        let year = chrono::Datelike::year(&day);
        let cells = build(year, month, &leaves, &[], start, day).unwrap();

        let hits: Vec<_> = cells
            .iter()
            .filter(|c| !c.leaves_on_day.is_empty())
            .filter_map(|c| c.date)
            .collect();
        prop_assert_eq!(hits, vec![day]);
    }
}
