use crate::{
    auth::credentials::Credentials,
    calendar::{
        CalendarCell, CellKind, DayDisplay, MonthRef, StartOfWeek, YearBounds, build_grid,
        compute_year_bounds, holiday_on, leaves_on, weekday_labels,
    },
    config::Config,
    error::ServiceResult,
    model::{holiday::PublicHoliday, leave::Leave},
    store::LeaveStore,
    utils::{colour::string_to_colour, date_utils::business_today},
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    #[schema(example = 2024)]
    /// Year to show, defaults to the current year
    pub year: Option<i32>,
    #[schema(example = 11)]
    /// 0-based month (January = 0), defaults to the current month
    pub month: Option<u32>,
    #[schema(example = 0)]
    /// First column of the grid, 0 = Sunday
    pub start_of_week: Option<u8>,
    /// Refetch leaves and holidays instead of using the cached snapshot
    pub refresh: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct MonthParams {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 11)]
    pub month: u32,
    #[schema(example = "December")]
    pub name: String,
}

impl From<MonthRef> for MonthParams {
    fn from(month: MonthRef) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            name: month.name().to_string(),
        }
    }
}

/// A leave as listed inside a day cell.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarItem {
    #[schema(example = "8")]
    pub id: String,
    #[schema(example = "Lisa Anderson")]
    pub name: String,
    #[schema(example = "Customer Support")]
    pub department: String,
    /// department colour for the dot next to the name
    #[schema(example = "#4a2c9e")]
    pub colour: String,
}

impl From<&Leave> for CalendarItem {
    fn from(leave: &Leave) -> Self {
        Self {
            id: leave.id.clone(),
            name: leave.name.clone(),
            department: leave.department.to_string(),
            colour: string_to_colour(leave.department.as_str()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CellView {
    #[schema(example = 24)]
    pub day_number: u32,
    pub kind: CellKind,
    #[schema(example = "2024-12-24", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    #[schema(example = "Christmas Eve")]
    pub holiday_name: Option<String>,
    /// at most two leaves; empty on holidays
    pub leaves: Vec<CalendarItem>,
    /// leaves left out of `leaves` ("+N more")
    #[schema(example = 3)]
    pub more: usize,
    /// every leave covering the day, holidays included
    #[schema(example = 5)]
    pub leave_count: usize,
}

impl From<&CalendarCell<'_>> for CellView {
    fn from(cell: &CalendarCell<'_>) -> Self {
        let (holiday_name, leaves, more) = match cell.display() {
            DayDisplay::Blank => (None, Vec::new(), 0),
            DayDisplay::Holiday(name) => (Some(name.to_string()), Vec::new(), 0),
            DayDisplay::Leaves { visible, more } => (
                None,
                visible.iter().map(|leave| CalendarItem::from(*leave)).collect(),
                more,
            ),
        };

        Self {
            day_number: cell.day_number,
            kind: cell.kind,
            date: cell.date,
            is_today: cell.is_today,
            holiday_name,
            leaves,
            more,
            leave_count: cell.leaves_on_day.len(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarResponse {
    pub month: MonthParams,
    /// absent at the edge of the supported year range
    pub previous: Option<MonthParams>,
    pub next: Option<MonthParams>,
    pub start_of_week: StartOfWeek,
    #[schema(example = json!(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]))]
    pub weekdays: Vec<String>,
    /// year picker range, over leaves
    pub year_bounds: YearBounds,
    #[schema(example = json!([2024, 2025]))]
    pub years: Vec<i32>,
    #[schema(example = "2024-12-24", format = "date", value_type = String)]
    pub today: NaiveDate,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayResponse {
    #[schema(example = "2024-12-24", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub holiday_name: Option<String>,
    /// every leave covering the date, in sheet order
    pub leaves: Vec<Leave>,
}

/// Month view over already-fetched snapshots.
pub fn calendar_response(
    month: MonthRef,
    start: StartOfWeek,
    leaves: &[Leave],
    holidays: &[PublicHoliday],
    today: NaiveDate,
) -> CalendarResponse {
    let cells = build_grid(month, leaves, holidays, start, today);
    let year_bounds = compute_year_bounds(leaves, today);

    CalendarResponse {
        month: month.into(),
        previous: month.previous().ok().map(MonthParams::from),
        next: month.next().ok().map(MonthParams::from),
        start_of_week: start,
        weekdays: weekday_labels(start).iter().map(|d| d.to_string()).collect(),
        year_bounds,
        years: year_bounds.years().collect(),
        today,
        cells: cells.iter().map(CellView::from).collect(),
    }
}

pub fn day_response(date: NaiveDate, leaves: &[Leave], holidays: &[PublicHoliday]) -> DayResponse {
    DayResponse {
        date,
        holiday_name: holiday_on(date, holidays).map(|h| h.name.clone()),
        leaves: leaves_on(date, leaves).into_iter().cloned().collect(),
    }
}

/// for getting the month grid endpoint
#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Month grid with leaves and holidays", body = CalendarResponse),
        (status = 400, description = "Month outside 0..=11, bad year or start of week", body = Object, example = json!({
            "error": "invalid argument: month must be in 0..=11, got 12"
        })),
        (status = 401, description = "Missing or rejected credentials"),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Calendar"
)]
#[instrument(
    name = "calendar_month",
    skip(store, config, query, credentials),
    fields(username = %credentials.username)
)]
pub async fn month_calendar(
    credentials: Credentials,
    store: web::Data<LeaveStore>,
    config: web::Data<Config>,
    query: web::Query<CalendarQuery>,
) -> ServiceResult<HttpResponse> {
    let today = business_today(config.business_timezone);
    let current = MonthRef::containing(today);

    let month = MonthRef::new(
        query.year.unwrap_or(current.year()),
        query.month.unwrap_or(current.month()),
    )?;
    let start = match query.start_of_week {
        Some(day) => StartOfWeek::new(day)?,
        None => config.start_of_week,
    };

    let force = query.refresh.unwrap_or(false);
    let (leaves, holidays) = futures::try_join!(
        store.leaves(&credentials, force),
        store.holidays(&credentials, force)
    )?;

    debug!(
        year = month.year(),
        month = month.month(),
        leaves = leaves.len(),
        holidays = holidays.len(),
        "Building month grid"
    );

    Ok(HttpResponse::Ok().json(calendar_response(month, start, &leaves, &holidays, today)))
}

/// for getting one day's leaves endpoint
#[utoipa::path(
    get,
    path = "/api/calendar/day/{date}",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD", example = "2024-12-24")
    ),
    responses(
        (status = 200, description = "Holiday and every leave on the date", body = DayResponse),
        (status = 401, description = "Missing or rejected credentials"),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Calendar"
)]
pub async fn day_detail(
    credentials: Credentials,
    store: web::Data<LeaveStore>,
    path: web::Path<NaiveDate>,
) -> ServiceResult<HttpResponse> {
    let date = path.into_inner();

    let (leaves, holidays) = futures::try_join!(
        store.leaves(&credentials, false),
        store.holidays(&credentials, false)
    )?;

    Ok(HttpResponse::Ok().json(day_response(date, &leaves, &holidays)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::leave::{Department, LeaveCategory, LeaveType};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn leave(id: &str, start: NaiveDate, end: NaiveDate) -> Leave {
        Leave {
            id: id.into(),
            name: format!("person {id}"),
            department: Department::from("Engineering"),
            role: "Engineer".into(),
            leave_reason: "Break".into(),
            leave_type: LeaveType::from("Full Day"),
            leave_category: LeaveCategory::from("Vacation"),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn views_apply_overflow_and_holidays() {
        let leaves: Vec<Leave> = (0..4)
            .map(|i| leave(&i.to_string(), d(2024, 12, 24), d(2024, 12, 25)))
            .collect();
        let holidays = vec![PublicHoliday {
            id: "0".into(),
            name: "Christmas".into(),
            start_date: d(2024, 12, 25),
            end_date: d(2024, 12, 25),
        }];
        let month = MonthRef::new(2024, 11).unwrap();
        let view = calendar_response(month, StartOfWeek::SUNDAY, &leaves, &holidays, d(2024, 12, 24));

        assert_eq!(view.cells.len(), 35);
        assert_eq!(view.weekdays[0], "Sun");
        assert_eq!(view.previous.as_ref().unwrap().name, "November");
        assert_eq!(view.next.as_ref().unwrap().year, 2025);
        assert_eq!(view.years, vec![2024]);

        let eve = &view.cells[23];
        assert_eq!(eve.day_number, 24);
        assert!(eve.is_today);
        assert_eq!(eve.leaves.len(), 2);
        assert_eq!(eve.more, 2);
        assert_eq!(eve.leaves[0].colour, string_to_colour("Engineering"));

        let christmas = &view.cells[24];
        assert_eq!(christmas.holiday_name.as_deref(), Some("Christmas"));
        assert!(christmas.leaves.is_empty());
        assert_eq!(christmas.more, 0);
        assert_eq!(christmas.leave_count, 4);
    }

    #[test]
    fn day_view_ignores_holiday_precedence() {
        let leaves = vec![leave("0", d(2024, 12, 25), d(2024, 12, 25))];
        let holidays = vec![PublicHoliday {
            id: "0".into(),
            name: "Christmas".into(),
            start_date: d(2024, 12, 25),
            end_date: d(2024, 12, 25),
        }];
        let day = day_response(d(2024, 12, 25), &leaves, &holidays);
        assert_eq!(day.holiday_name.as_deref(), Some("Christmas"));
        assert_eq!(day.leaves.len(), 1);
    }
}
