use std::sync::Arc;

use crate::application::services::{AuthorizationService, HealthMonitor};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub authorization: Arc<AuthorizationService>,
    pub monitor: Arc<HealthMonitor>,
}

impl AppState {
    pub fn new(authorization: Arc<AuthorizationService>, monitor: Arc<HealthMonitor>) -> Self {
        Self {
            authorization,
            monitor,
        }
    }
}
