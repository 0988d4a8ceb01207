//! Authentication session contract.

use async_trait::async_trait;
use thiserror::Error;

/// No valid session exists for the requested service type.
///
/// Propagated as-is: the authorization flow does not attempt
/// re-authentication itself.
#[derive(Debug, Error)]
#[error("no valid session for service type '{service_type}'")]
pub struct SessionError {
    pub service_type: String,
}

impl SessionError {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
        }
    }
}

/// Supplies session tokens for downstream service calls.
///
/// Token acquisition and refresh mechanics are owned by an external
/// authentication proxy; the core only depends on this narrow contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Session token for the given service type.
    async fn session_token(&self, service_type: &str) -> Result<String, SessionError>;
}
