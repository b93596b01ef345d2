use chrono::NaiveDate;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::model::leave::Leave;

/// At most this many leaves are listed in a day cell; the rest collapse
/// into a "+N more" count.
pub const MAX_VISIBLE_LEAVES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CellKind {
    InBounds,
    OutOfBoundsPrevious,
    OutOfBoundsNext,
}

/// One square of the month grid.
///
/// Out-of-bounds cells only carry the adjacent month's day number; they have
/// no date, holiday or leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell<'a> {
    pub day_number: u32,
    pub kind: CellKind,
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub holiday_name: Option<&'a str>,
    /// Every leave covering the day, in source order. Filled in even when the
    /// day is a holiday; see [`CalendarCell::display`].
    pub leaves_on_day: Vec<&'a Leave>,
}

/// What a cell shows once holiday precedence and overflow are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayDisplay<'c, 'a> {
    /// Out-of-bounds cell: day number only.
    Blank,
    Holiday(&'a str),
    Leaves {
        visible: &'c [&'a Leave],
        more: usize,
    },
}

impl<'a> CalendarCell<'a> {
    pub(crate) fn out_of_bounds(day_number: u32, kind: CellKind) -> Self {
        Self {
            day_number,
            kind,
            date: None,
            is_today: false,
            holiday_name: None,
            leaves_on_day: Vec::new(),
        }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.kind == CellKind::InBounds
    }

    pub fn display(&self) -> DayDisplay<'_, 'a> {
        if !self.is_in_bounds() {
            return DayDisplay::Blank;
        }
        if let Some(name) = self.holiday_name {
            return DayDisplay::Holiday(name);
        }

        let shown = self.leaves_on_day.len().min(MAX_VISIBLE_LEAVES);
        DayDisplay::Leaves {
            visible: &self.leaves_on_day[..shown],
            more: self.leaves_on_day.len() - shown,
        }
    }
}
