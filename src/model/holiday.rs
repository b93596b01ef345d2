use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::calendar::DateSpan;

/// A named public holiday, possibly spanning several days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicHoliday {
    #[schema(example = "0")]
    pub id: String,
    #[schema(example = "Christmas")]
    pub name: String,
    #[schema(example = "2024-12-25", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-12-25", format = "date", value_type = String)]
    pub end_date: NaiveDate,
}

impl DateSpan for PublicHoliday {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}
