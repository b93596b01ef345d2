use crate::api::calendar::{
    CalendarItem, CalendarQuery, CalendarResponse, CellView, DayResponse, MonthParams,
};
use crate::api::leave::{HolidayListResponse, LeaveListResponse};
use crate::calendar::{CellKind, StartOfWeek, YearBounds};
use crate::model::{
    holiday::PublicHoliday, leave::Leave, schema::LeaveSchema, submission::LeaveSubmission,
};
use crate::models::{LoginReqDto, LoginResponse, RefreshQuery};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaves Calendar API",
        version = "1.0.0",
        description = r#"
## Leaves Calendar

Month-view calendar over a team's leave requests and public holidays, both
kept in a shared spreadsheet.

### 🔹 Key Features
- **Calendar**
  - Month grid with leading/trailing days, holidays and up to two leaves per day
  - Day detail with every leave covering the date
- **Leave**
  - List leaves and holidays, submit a leave request

### 🔐 Security
Protected endpoints take **HTTP Basic** credentials, forwarded to the sheet
endpoint which is the only judge of them.

---
Built with **Rust**, **Actix Web**, **reqwest**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::logout,

        crate::api::calendar::month_calendar,
        crate::api::calendar::day_detail,

        crate::api::leave::list_leaves,
        crate::api::leave::create_leave,
        crate::api::leave::leave_schema,
        crate::api::leave::list_holidays
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            RefreshQuery,
            CalendarQuery,
            CalendarResponse,
            CellView,
            CellKind,
            CalendarItem,
            MonthParams,
            DayResponse,
            StartOfWeek,
            YearBounds,
            Leave,
            PublicHoliday,
            LeaveSubmission,
            LeaveSchema,
            LeaveListResponse,
            HolidayListResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login and logout"),
        (name = "Calendar", description = "Month grid and day detail APIs"),
        (name = "Leave", description = "Leave and holiday APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/login",
            "/auth/logout",
            "/api/calendar",
            "/api/calendar/day/{date}",
            "/api/leave",
            "/api/leave/schema",
            "/api/holiday",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
