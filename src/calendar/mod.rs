//! Month grid layout and the leave/holiday overlay.
//!
//! Everything here is synchronous and pure: inputs are already-fetched
//! snapshots, outputs are freshly allocated and borrow from the inputs.

pub mod bounds;
pub mod cell;
pub mod error;
pub mod grid;
pub mod range;

pub use bounds::{YearBounds, compute_year_bounds};
pub use cell::{CalendarCell, CellKind, DayDisplay, MAX_VISIBLE_LEAVES};
pub use error::CalendarError;
pub use grid::{
    MonthRef, StartOfWeek, build, build_grid, days_in_month, holiday_on, leaves_on, month_names,
    weekday_labels,
};
pub use range::{DateSpan, matches};
