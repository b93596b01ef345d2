use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::calendar::DateSpan;

/// Value used by the form for "none of the listed options".
pub const OTHER: &str = "Other";

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $example:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(example = $example)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_other(&self) -> bool {
                self.0 == OTHER
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_enum!(
    /// Department as written on the sheet. The allowed set lives in
    /// [`LeaveSchema`](crate::model::schema::LeaveSchema), not here.
    Department,
    "Engineering"
);

string_enum!(
    /// Full day, half day (morning/afternoon) or multiple days.
    LeaveType,
    "Full Day"
);

string_enum!(
    /// Vacation, sick leave and so on.
    LeaveCategory,
    "Sick Leave"
);

impl LeaveType {
    pub const MULTIPLE_DAYS: &'static str = "Multiple Days";

    pub fn multiple_days() -> Self {
        Self::new(Self::MULTIPLE_DAYS)
    }

    pub fn is_multiple_days(&self) -> bool {
        self.0 == Self::MULTIPLE_DAYS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "0",
    "name": "Kevin Thomas",
    "department": "Engineering",
    "role": "Product Manager",
    "leave_reason": "Family event",
    "leave_type": "Multiple Days",
    "leave_category": "Vacation",
    "start_date": "2024-12-23",
    "end_date": "2024-12-24"
}))]
pub struct Leave {
    /// row index on the sheet, stable within one fetch
    #[schema(example = "0")]
    pub id: String,
    pub name: String,
    pub department: Department,
    pub role: String,
    pub leave_reason: String,
    pub leave_type: LeaveType,
    pub leave_category: LeaveCategory,
    #[schema(example = "2024-12-23", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-12-24", format = "date", value_type = String)]
    pub end_date: NaiveDate,
}

impl DateSpan for Leave {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}
