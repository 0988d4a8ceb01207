//! Integration registry contract.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{AppAuthorizationModel, UserAuthorizationData};

/// Raised by an integration when a user has not completed (or has failed)
/// its authorization flow. An expected business outcome, not a system fault.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UnauthorizedUserError {
    pub message: String,
}

impl UnauthorizedUserError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A deployed integration known to the bridge.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Integration: Send + Sync {
    /// Declared authorization scheme, or `None` when the integration does not
    /// authorize individual users.
    fn authorization_model(&self) -> Option<AppAuthorizationModel>;

    /// Service type the integration authenticates against, used to key
    /// session-token resolution.
    fn integration_type(&self) -> String;

    /// Validates a user authorization record against service-side policy.
    ///
    /// # Errors
    ///
    /// Returns [`UnauthorizedUserError`] when the record does not establish a
    /// completed authorization. The record itself is left untouched.
    async fn verify_user_authorization_data(
        &self,
        data: &UserAuthorizationData,
    ) -> Result<(), UnauthorizedUserError>;
}

/// Lookup of deployed integrations by configuration id.
///
/// # Implementations
///
/// - [`crate::infrastructure::NullIntegrationRegistry`] - empty registry for
///   deployments where integrations are bootstrapped externally
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntegrationRegistry: Send + Sync {
    /// Resolves an integration, or `None` when the configuration id is
    /// unknown or the integration has not been bootstrapped.
    async fn integration_by_id(&self, configuration_id: &str) -> Option<Arc<dyn Integration>>;
}
