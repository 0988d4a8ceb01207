//! Remote authorization store contract.

use async_trait::async_trait;

use super::fetcher::FetchError;
use crate::domain::entities::UserAuthorizationData;

/// Client for the remote store of persisted user authorization records.
///
/// # Implementations
///
/// - [`crate::infrastructure::RemoteAuthorizationStore`] - HTTP client
///   against the primary platform API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    /// Stored authorization record for the given user and integration URL
    /// under one configuration, or `None` when the user has not authorized
    /// yet.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failures. Callers treat a failed
    /// lookup the same as an absent record.
    async fn user_auth_data(
        &self,
        session_token: &str,
        configuration_id: &str,
        user_id: i64,
        url: &str,
    ) -> Result<Option<UserAuthorizationData>, FetchError>;
}
