//! HTTP request handlers for API endpoints.

pub mod authorization;
pub mod health;

pub use authorization::{authorization_model_handler, user_session_handler};
pub use health::services_health_handler;
