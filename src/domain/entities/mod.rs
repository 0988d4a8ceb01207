//! Core domain entities.

pub mod authorization;
pub mod service_info;

pub use authorization::{AppAuthorizationModel, UserAuthorizationData};
pub use service_info::{Connectivity, ServiceInfo};
