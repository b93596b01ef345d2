pub mod holiday;
pub mod leave;
pub mod schema;
pub mod submission;
