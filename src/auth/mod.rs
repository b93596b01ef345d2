pub mod credentials;
pub mod handlers;
