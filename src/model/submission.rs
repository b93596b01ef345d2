use std::collections::BTreeMap;

use chrono::NaiveDate;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    leave::{Department, LeaveCategory, LeaveType},
    schema::LeaveSchema,
};

/// Field name → first problem found with it.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// The leave request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Kevin Thomas",
    "email": "kevin.thomas@example.com",
    "department": "Engineering",
    "role": "Product Manager",
    "leave_start_date": "2024-12-23",
    "leave_end_date": "2024-12-24",
    "reason_for_leave": "Family event",
    "leave_category": "Vacation"
}))]
pub struct LeaveSubmission {
    pub name: String,
    pub email: String,
    pub department: Department,
    #[serde(default)]
    pub custom_department: Option<String>,
    pub role: String,
    #[schema(example = "2024-12-23", format = "date", value_type = String)]
    pub leave_start_date: NaiveDate,
    #[schema(example = "2024-12-24", format = "date", value_type = String)]
    pub leave_end_date: NaiveDate,
    pub reason_for_leave: String,
    /// required for single-day leaves, forced to "Multiple Days" otherwise
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    pub leave_category: LeaveCategory,
    #[serde(default)]
    pub custom_category: Option<String>,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn blank_opt(value: Option<&String>) -> bool {
    value.is_none_or(|v| blank(v))
}

impl LeaveSubmission {
    pub fn is_single_day(&self) -> bool {
        self.leave_start_date == self.leave_end_date
    }

    /// Applies the date-driven leave type rule: a multi-day range is always
    /// "Multiple Days"; a single day drops a stale "Multiple Days".
    pub fn normalized(mut self) -> Self {
        if !self.is_single_day() {
            self.leave_type = Some(LeaveType::multiple_days());
        } else if self.leave_type.as_ref().is_some_and(LeaveType::is_multiple_days) {
            self.leave_type = None;
        }
        self
    }

    /// Department to record: the custom value when "Other" was picked.
    pub fn effective_department(&self) -> &str {
        match &self.custom_department {
            Some(custom) if self.department.is_other() => custom.trim(),
            _ => self.department.as_str(),
        }
    }

    pub fn effective_category(&self) -> &str {
        match &self.custom_category {
            Some(custom) if self.leave_category.is_other() => custom.trim(),
            _ => self.leave_category.as_str(),
        }
    }

    pub fn effective_leave_type(&self) -> &str {
        self.leave_type.as_ref().map_or("", LeaveType::as_str)
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(
        &self,
        schema: &LeaveSchema,
        allowed_email_domain: Option<&str>,
    ) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if blank(&self.name) {
            errors.insert("name", "Name is required".into());
        }

        if blank(&self.email) {
            errors.insert("email", "Email is required".into());
        } else if !EmailAddress::is_valid(self.email.trim()) {
            errors.insert("email", "Invalid email".into());
        } else if let Some(domain) = allowed_email_domain {
            let suffix = format!("@{}", domain.to_lowercase());
            if !self.email.trim().to_lowercase().ends_with(&suffix) {
                errors.insert(
                    "email",
                    format!("Only {suffix} email addresses are allowed"),
                );
            }
        }

        if blank(self.department.as_str()) {
            errors.insert("department", "Department is required".into());
        } else if !schema.has_department(&self.department) {
            errors.insert(
                "department",
                format!("Unknown department {}", self.department),
            );
        } else if self.department.is_other() && blank_opt(self.custom_department.as_ref()) {
            errors.insert("custom_department", "Custom department is required".into());
        }

        if blank(&self.role) {
            errors.insert("role", "Role is required".into());
        }

        if self.leave_end_date < self.leave_start_date {
            errors.insert(
                "leave_end_date",
                "End date must be after start date".into(),
            );
        }

        if blank(&self.reason_for_leave) {
            errors.insert("reason_for_leave", "Reason for leave is required".into());
        }

        if self.is_single_day() {
            match &self.leave_type {
                None => {
                    errors.insert("leave_type", "Leave type is required".into());
                }
                Some(t) if !schema.single_day_types().any(|allowed| allowed == t) => {
                    errors.insert("leave_type", format!("Unknown leave type {t}"));
                }
                Some(_) => {}
            }
        }

        if blank(self.leave_category.as_str()) {
            errors.insert("leave_category", "Leave category is required".into());
        } else if !schema.has_category(&self.leave_category) {
            errors.insert(
                "leave_category",
                format!("Unknown leave category {}", self.leave_category),
            );
        } else if self.leave_category.is_other() && blank_opt(self.custom_category.as_ref()) {
            errors.insert("custom_category", "Custom category is required".into());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
