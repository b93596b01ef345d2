#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use leaves_calendar::{
    auth::credentials::Credentials,
    error::{ServiceError, ServiceResult},
    model::{
        holiday::PublicHoliday,
        leave::{Department, Leave, LeaveCategory, LeaveType},
        submission::LeaveSubmission,
    },
    remote::LeaveSource,
};

pub const PASSWORD: &str = "s3cret";

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn leave(id: &str, name: &str, start: NaiveDate, end: NaiveDate) -> Leave {
    Leave {
        id: id.into(),
        name: name.into(),
        department: Department::from("Engineering"),
        role: "Engineer".into(),
        leave_reason: "Time off".into(),
        leave_type: if start == end {
            LeaveType::from("Full Day")
        } else {
            LeaveType::multiple_days()
        },
        leave_category: LeaveCategory::from("Vacation"),
        start_date: start,
        end_date: end,
    }
}

pub fn holiday(id: &str, name: &str, start: NaiveDate, end: NaiveDate) -> PublicHoliday {
    PublicHoliday {
        id: id.into(),
        name: name.into(),
        start_date: start,
        end_date: end,
    }
}

/// December 2024 fixture used across the HTTP tests.
pub fn december_leaves() -> Vec<Leave> {
    vec![
        leave("0", "Kevin Thomas", d(2024, 12, 23), d(2024, 12, 24)),
        leave("1", "Lisa Anderson", d(2024, 12, 24), d(2024, 12, 24)),
        leave("2", "Omar Haddad", d(2024, 12, 24), d(2024, 12, 26)),
        leave("3", "Priya Nair", d(2024, 12, 30), d(2025, 1, 2)),
    ]
}

pub fn december_holidays() -> Vec<PublicHoliday> {
    vec![holiday("0", "Christmas", d(2024, 12, 25), d(2024, 12, 25))]
}

/// In-memory sheet that accepts a single password.
#[derive(Default)]
pub struct MemorySource {
    pub leaves: Vec<Leave>,
    pub holidays: Vec<PublicHoliday>,
    pub submitted: Mutex<Vec<LeaveSubmission>>,
}

impl MemorySource {
    pub fn december() -> Self {
        Self {
            leaves: december_leaves(),
            holidays: december_holidays(),
            submitted: Mutex::default(),
        }
    }

    fn check(&self, credentials: &Credentials) -> ServiceResult<()> {
        if credentials.password == PASSWORD {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized("Invalid credentials".into()))
        }
    }
}

#[async_trait]
impl LeaveSource for MemorySource {
    async fn fetch_leaves(&self, credentials: &Credentials) -> ServiceResult<Vec<Leave>> {
        self.check(credentials)?;
        Ok(self.leaves.clone())
    }

    async fn fetch_holidays(&self, credentials: &Credentials) -> ServiceResult<Vec<PublicHoliday>> {
        self.check(credentials)?;
        Ok(self.holidays.clone())
    }

    async fn submit_leave(
        &self,
        credentials: &Credentials,
        submission: &LeaveSubmission,
    ) -> ServiceResult<()> {
        self.check(credentials)?;
        self.submitted.lock().unwrap().push(submission.clone());
        Ok(())
    }
}
