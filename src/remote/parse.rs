use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    model::{
        holiday::PublicHoliday,
        leave::{Department, Leave, LeaveCategory, LeaveType},
        submission::LeaveSubmission,
    },
    utils::date_utils::parse_sheet_date,
};

/// Envelope returned by the spreadsheet endpoint.
#[derive(Debug, Deserialize)]
pub struct SheetResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sheet cells arrive as strings, numbers or null depending on formatting.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLeaveRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(rename = "reason for leave", default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(rename = "leave type", default, deserialize_with = "lenient_string")]
    pub leave_type: String,
    #[serde(rename = "leave category", default, deserialize_with = "lenient_string")]
    pub leave_category: String,
    #[serde(rename = "leave start date", default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(rename = "leave end date", default, deserialize_with = "lenient_string")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawHolidayRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "holiday start date", default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(rename = "holiday end date", default, deserialize_with = "lenient_string")]
    pub end_date: String,
}

fn is_blank_row(name: &str, start: &str, end: &str) -> bool {
    [name, start, end].iter().all(|s| s.trim().is_empty())
}

fn row_date(row: usize, field: &str, raw: &str, tz: Tz) -> Option<NaiveDate> {
    let date = parse_sheet_date(raw, tz);
    if date.is_none() {
        warn!(row, field, raw, "Skipping row with unparsable date");
    }
    date
}

fn row_range(
    row: usize,
    kind: &str,
    start: &str,
    end: &str,
    tz: Tz,
) -> Option<(NaiveDate, NaiveDate)> {
    let start_date = row_date(row, &format!("{kind} start date"), start, tz)?;
    let end_date = row_date(row, &format!("{kind} end date"), end, tz)?;
    if end_date < start_date {
        warn!(row, %start_date, %end_date, "{kind} ends before it starts");
    }
    Some((start_date, end_date))
}

/// Turns raw leave rows into records; ids are the row index.
///
/// Blank rows and rows with an unparsable date are skipped so one bad cell
/// never hides the rest of the sheet.
pub fn parse_leaves(rows: Vec<RawLeaveRow>, tz: Tz) -> Vec<Leave> {
    let mut leaves = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        if is_blank_row(&row.name, &row.start_date, &row.end_date) {
            debug!(row = index, "Skipping blank leave row");
            continue;
        }
        let Some((start_date, end_date)) =
            row_range(index, "leave", &row.start_date, &row.end_date, tz)
        else {
            continue;
        };

        leaves.push(Leave {
            id: index.to_string(),
            name: row.name,
            department: Department::from(row.department),
            role: row.role,
            leave_reason: row.reason,
            leave_type: LeaveType::from(row.leave_type),
            leave_category: LeaveCategory::from(row.leave_category),
            start_date,
            end_date,
        });
    }

    leaves
}

pub fn parse_holidays(rows: Vec<RawHolidayRow>, tz: Tz) -> Vec<PublicHoliday> {
    let mut holidays = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        if is_blank_row(&row.name, &row.start_date, &row.end_date) {
            debug!(row = index, "Skipping blank holiday row");
            continue;
        }
        let Some((start_date, end_date)) =
            row_range(index, "holiday", &row.start_date, &row.end_date, tz)
        else {
            continue;
        };

        holidays.push(PublicHoliday {
            id: index.to_string(),
            name: row.name,
            start_date,
            end_date,
        });
    }

    holidays
}

/// The sheet row a submission appends.
pub fn submission_row(submission: &LeaveSubmission) -> RawLeaveRow {
    RawLeaveRow {
        name: submission.name.trim().to_string(),
        department: submission.effective_department().to_string(),
        role: submission.role.trim().to_string(),
        reason: submission.reason_for_leave.trim().to_string(),
        leave_type: submission.effective_leave_type().to_string(),
        leave_category: submission.effective_category().to_string(),
        start_date: submission.leave_start_date.format("%Y-%m-%d").to_string(),
        end_date: submission.leave_end_date.format("%Y-%m-%d").to_string(),
    }
}
