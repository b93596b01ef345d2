use chrono::NaiveDate;

/// Inclusive day-granularity range check.
///
/// `NaiveDate` carries no time-of-day, so both ends compare at day
/// granularity. A reversed range (`start > end`) contains nothing.
pub fn matches(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// A record that occupies an inclusive run of calendar days.
pub trait DateSpan {
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;

    fn contains(&self, date: NaiveDate) -> bool {
        matches(date, self.start_date(), self.end_date())
    }
}

impl<T: DateSpan + ?Sized> DateSpan for &T {
    fn start_date(&self) -> NaiveDate {
        (**self).start_date()
    }

    fn end_date(&self) -> NaiveDate {
        (**self).end_date()
    }
}
