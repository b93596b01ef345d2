use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    cell::{CalendarCell, CellKind},
    error::CalendarError,
    range::DateSpan,
};
use crate::model::{holiday::PublicHoliday, leave::Leave};

const DAYS_PER_WEEK: u32 = 7;
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a month of the proleptic Gregorian calendar. `month` is 0-based.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 0,
    }
}

/// A validated (year, 0-based month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthRef {
    first: NaiveDate,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::invalid(format!(
                "month must be in 0..=11, got {month}"
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::invalid(format!(
                "year must be in {MIN_YEAR}..={MAX_YEAR}, got {year}"
            )));
        }

        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|first| Self { first })
            .ok_or_else(|| CalendarError::invalid(format!("no such month {year}-{month}")))
    }

    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based, January = 0.
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn name(&self) -> &'static str {
        month_names()[self.month() as usize]
    }

    pub fn previous(&self) -> Result<Self, CalendarError> {
        match self.month() {
            0 => Self::new(self.year() - 1, 11),
            m => Self::new(self.year(), m - 1),
        }
    }

    pub fn next(&self) -> Result<Self, CalendarError> {
        match self.month() {
            11 => Self::new(self.year() + 1, 0),
            m => Self::new(self.year(), m + 1),
        }
    }

    fn previous_days_in_month(&self) -> u32 {
        match self.month() {
            0 => days_in_month(self.year() - 1, 11),
            m => days_in_month(self.year(), m - 1),
        }
    }
}

/// First column of the grid; 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
#[schema(value_type = u8, example = 0)]
pub struct StartOfWeek(u8);

impl StartOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);

    pub fn new(day: u8) -> Result<Self, CalendarError> {
        if day > 6 {
            return Err(CalendarError::invalid(format!(
                "start of week must be in 0..=6, got {day}"
            )));
        }
        Ok(Self(day))
    }

    pub fn days_from_sunday(&self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u8> for StartOfWeek {
    type Error = CalendarError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<StartOfWeek> for u8 {
    fn from(start: StartOfWeek) -> Self {
        start.0
    }
}

/// Short weekday names in column order.
pub fn weekday_labels(start: StartOfWeek) -> [&'static str; 7] {
    let mut labels = WEEKDAY_LABELS;
    labels.rotate_left(start.0 as usize);
    labels
}

pub fn month_names() -> [&'static str; 12] {
    MONTH_NAMES
}

/// Leading out-of-bounds cells needed to line day 1 up under its weekday.
pub fn first_weekday_offset(month: MonthRef, start: StartOfWeek) -> u32 {
    let first = month.first_day().weekday().num_days_from_sunday();
    (first + DAYS_PER_WEEK - start.days_from_sunday()) % DAYS_PER_WEEK
}

/// All leaves covering `date`, in source order.
pub fn leaves_on<'a>(date: NaiveDate, leaves: &'a [Leave]) -> Vec<&'a Leave> {
    leaves.iter().filter(|leave| leave.contains(date)).collect()
}

/// The first holiday (source order) covering `date`.
pub fn holiday_on<'a>(date: NaiveDate, holidays: &'a [PublicHoliday]) -> Option<&'a PublicHoliday> {
    holidays.iter().find(|holiday| holiday.contains(date))
}

/// Lays out `month` as whole weeks starting on `start`.
///
/// The result always holds a multiple of seven cells: the previous month's
/// tail, every day of `month`, then the next month's head. `today` is only
/// compared, never read from a clock, so rebuilding after midnight is the
/// caller's job.
pub fn build_grid<'a>(
    month: MonthRef,
    leaves: &'a [Leave],
    holidays: &'a [PublicHoliday],
    start: StartOfWeek,
    today: NaiveDate,
) -> Vec<CalendarCell<'a>> {
    let days = month.days_in_month();
    let offset = first_weekday_offset(month, start);
    let remaining = DAYS_PER_WEEK - (offset + days) % DAYS_PER_WEEK;
    let trailing = if remaining < DAYS_PER_WEEK { remaining } else { 0 };

    let mut cells = Vec::with_capacity((offset + days + trailing) as usize);

    let prev_days = month.previous_days_in_month();
    for i in 0..offset {
        cells.push(CalendarCell::out_of_bounds(
            prev_days - offset + 1 + i,
            CellKind::OutOfBoundsPrevious,
        ));
    }

    for date in month.first_day().iter_days().take(days as usize) {
        cells.push(CalendarCell {
            day_number: date.day(),
            kind: CellKind::InBounds,
            date: Some(date),
            is_today: date == today,
            holiday_name: holiday_on(date, holidays).map(|h| h.name.as_str()),
            leaves_on_day: leaves_on(date, leaves),
        });
    }

    for day in 1..=trailing {
        cells.push(CalendarCell::out_of_bounds(day, CellKind::OutOfBoundsNext));
    }

    cells
}

/// [`build_grid`] over raw integers; `month` is 0-based, `start_of_week`
/// counts from Sunday.
pub fn build<'a>(
    year: i32,
    month: u32,
    leaves: &'a [Leave],
    holidays: &'a [PublicHoliday],
    start_of_week: u8,
    today: NaiveDate,
) -> Result<Vec<CalendarCell<'a>>, CalendarError> {
    let month = MonthRef::new(year, month)?;
    let start = StartOfWeek::new(start_of_week)?;
    Ok(build_grid(month, leaves, holidays, start, today))
}
