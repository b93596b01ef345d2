pub mod api;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod docs;
pub mod error;
pub mod model;
pub mod models;
pub mod remote;
pub mod routes;
pub mod store;
pub mod utils;
