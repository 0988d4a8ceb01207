//! Empty integration registry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::collaborators::{Integration, IntegrationRegistry};

/// A registry with no deployed integrations.
///
/// Used when integrations are registered by an external bootstrap process
/// that has not run, or in deployments that only monitor service health.
/// Every lookup resolves to absent, so authorization requests surface as
/// "integration unavailable".
pub struct NullIntegrationRegistry;

impl NullIntegrationRegistry {
    pub fn new() -> Self {
        debug!("Using NullIntegrationRegistry (no integrations deployed)");
        Self
    }
}

impl Default for NullIntegrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntegrationRegistry for NullIntegrationRegistry {
    async fn integration_by_id(&self, _configuration_id: &str) -> Option<Arc<dyn Integration>> {
        None
    }
}
