//! Data Transfer Objects for request/response serialization.

pub mod authorization;
pub mod health;

pub use authorization::UserSessionQuery;
pub use health::{ServiceHealth, ServicesHealthResponse};
