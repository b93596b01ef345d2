pub mod colour;
pub mod date_utils;
