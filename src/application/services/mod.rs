//! Application services orchestrating domain logic.

pub mod authorization_service;
pub mod health_check;
pub mod monitor;

pub use authorization_service::{AuthorizationModelOutcome, AuthorizationService};
pub use health_check::{HealthCheckInvoker, ServiceCheckConfig};
pub use monitor::HealthMonitor;
