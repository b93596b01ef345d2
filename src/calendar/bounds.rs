use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use super::range::DateSpan;

/// Earliest and latest year touched by a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct YearBounds {
    #[schema(example = 2024)]
    pub earliest_year: i32,
    #[schema(example = 2025)]
    pub latest_year: i32,
}

impl YearBounds {
    /// Years offered by the year picker, oldest first.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.earliest_year..=self.latest_year
    }
}

/// Year range for the picker: earliest start year to latest end year.
///
/// An empty collection falls back to `today`'s year on both ends so the
/// picker is never empty.
pub fn compute_year_bounds<S: DateSpan>(records: &[S], today: NaiveDate) -> YearBounds {
    let earliest = records.iter().map(|r| r.start_date().year()).min();
    let latest = records.iter().map(|r| r.end_date().year()).max();

    match (earliest, latest) {
        (Some(earliest_year), Some(latest_year)) => YearBounds {
            earliest_year,
            latest_year,
        },
        _ => YearBounds {
            earliest_year: today.year(),
            latest_year: today.year(),
        },
    }
}
