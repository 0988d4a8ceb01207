//! Session provider backed by a pre-established token.

use async_trait::async_trait;

use crate::domain::collaborators::{SessionError, SessionProvider};

/// Hands out a single deployment-supplied session token for every service
/// type.
///
/// Session establishment and refresh are owned by an external authentication
/// proxy; this provider is the seam for deployments that inject a token via
/// configuration. When no token was supplied, every request fails with
/// [`SessionError`].
pub struct StaticSessionProvider {
    token: Option<String>,
}

impl StaticSessionProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn session_token(&self, service_type: &str) -> Result<String, SessionError> {
        self.token
            .clone()
            .ok_or_else(|| SessionError::new(service_type))
    }
}
