pub mod calendar;
pub mod leave;
