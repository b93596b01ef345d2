use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parses a date cell from the sheet into a calendar date.
///
/// Plain `YYYY-MM-DD` values are taken as written. Timestamps are moved into
/// the business timezone first and then truncated, so a midnight entered in
/// the sheet's zone and serialized as UTC still lands on the right day.
pub fn parse_sheet_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    let instant = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%#z"));
    if let Ok(instant) = instant {
        return Some(instant.with_timezone(&tz).date_naive());
    }
    // zone-less timestamps are already business-local
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
}

/// Current calendar date in the business timezone.
pub fn business_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `30th Sep, 2024`
pub fn format_human_readable(date: NaiveDate) -> String {
    format!(
        "{}{} {}, {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%b"),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn plain_dates() {
        assert_eq!(
            parse_sheet_date("2024-12-23", Tz::Asia__Kolkata),
            Some(d(2024, 12, 23))
        );
        assert_eq!(
            parse_sheet_date(" 2024-12-23 ", Tz::UTC),
            Some(d(2024, 12, 23))
        );
    }

    #[test]
    fn utc_timestamps_shift_into_business_zone() {
        // midnight IST serialized as UTC
        let raw = "2024-12-22T18:30:00.000Z";
        assert_eq!(
            parse_sheet_date(raw, Tz::Asia__Kolkata),
            Some(d(2024, 12, 23))
        );
        assert_eq!(parse_sheet_date(raw, Tz::UTC), Some(d(2024, 12, 22)));
    }

    #[test]
    fn local_timestamps_truncate() {
        assert_eq!(
            parse_sheet_date("2024-12-23T15:45:00", Tz::Asia__Kolkata),
            Some(d(2024, 12, 23))
        );
    }

    #[test]
    fn timestamps_without_seconds() {
        assert_eq!(
            parse_sheet_date("2024-12-23T10:00", Tz::UTC),
            Some(d(2024, 12, 23))
        );
        // 00:30 in India is still the previous day in UTC
        assert_eq!(
            parse_sheet_date("2024-12-23T00:30+05:30", Tz::UTC),
            Some(d(2024, 12, 22))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_sheet_date("", Tz::UTC), None);
        assert_eq!(parse_sheet_date("23/12/2024", Tz::UTC), None);
        assert_eq!(parse_sheet_date("2024-02-30", Tz::UTC), None);
        assert_eq!(parse_sheet_date("2024-12-3l", Tz::UTC), None);
    }

    #[test]
    fn ordinals() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn human_readable() {
        assert_eq!(format_human_readable(d(2024, 9, 30)), "30th Sep, 2024");
        assert_eq!(format_human_readable(d(2024, 12, 23)), "23rd Dec, 2024");
        assert_eq!(format_human_readable(d(2025, 1, 1)), "1st Jan, 2025");
    }
}
