use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

use super::leave::{Department, LeaveCategory, LeaveType};

#[derive(Debug, Clone, Copy, Display, EnumIter)]
enum DefaultDepartment {
    Engineering,
    Marketing,
    Sales,
    Finance,
    #[strum(serialize = "HR")]
    Hr,
    Other,
}

#[derive(Debug, Clone, Copy, Display, EnumIter)]
enum DefaultLeaveType {
    #[strum(serialize = "Full Day")]
    FullDay,
    #[strum(serialize = "Half Day - Morning")]
    HalfDayMorning,
    #[strum(serialize = "Half Day - Afternoon")]
    HalfDayAfternoon,
    #[strum(serialize = "Multiple Days")]
    MultipleDays,
}

#[derive(Debug, Clone, Copy, Display, EnumIter)]
enum DefaultLeaveCategory {
    Vacation,
    #[strum(serialize = "Sick Leave")]
    SickLeave,
    #[strum(serialize = "Personal Leave")]
    PersonalLeave,
    #[strum(serialize = "Work From Home")]
    WorkFromHome,
    Other,
}

/// Allowed values for the submission form's enumerated fields.
///
/// The sets changed between sheet revisions, so they are configuration
/// rather than code. Fetched records are never checked against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaveSchema {
    pub departments: Vec<Department>,
    pub leave_types: Vec<LeaveType>,
    pub leave_categories: Vec<LeaveCategory>,
}

impl Default for LeaveSchema {
    fn default() -> Self {
        Self {
            departments: DefaultDepartment::iter()
                .map(|d| Department::new(d.to_string()))
                .collect(),
            leave_types: DefaultLeaveType::iter()
                .map(|t| LeaveType::new(t.to_string()))
                .collect(),
            leave_categories: DefaultLeaveCategory::iter()
                .map(|c| LeaveCategory::new(c.to_string()))
                .collect(),
        }
    }
}

/// Splits a comma separated list, dropping blanks.
pub fn parse_list<T: From<String>>(raw: &str) -> Vec<T> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| T::from(s.to_string()))
        .collect()
}

impl LeaveSchema {
    /// Defaults with any of the three sets replaced by a comma list.
    pub fn with_overrides(
        departments: Option<&str>,
        leave_types: Option<&str>,
        leave_categories: Option<&str>,
    ) -> Self {
        let mut schema = Self::default();
        if let Some(raw) = departments {
            schema.departments = parse_list(raw);
        }
        if let Some(raw) = leave_types {
            schema.leave_types = parse_list(raw);
        }
        if let Some(raw) = leave_categories {
            schema.leave_categories = parse_list(raw);
        }
        schema
    }

    pub fn has_department(&self, department: &Department) -> bool {
        self.departments.contains(department)
    }

    pub fn has_category(&self, category: &LeaveCategory) -> bool {
        self.leave_categories.contains(category)
    }

    /// Types a user may pick for a single-day leave.
    pub fn single_day_types(&self) -> impl Iterator<Item = &LeaveType> {
        self.leave_types.iter().filter(|t| !t.is_multiple_days())
    }
}
