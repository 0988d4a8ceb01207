//! Outbound HTTP fetch contract.

use async_trait::async_trait;
use thiserror::Error;

/// Failure fetching a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Minimal HTTP fetch interface used for health polling and remote lookups.
///
/// Returns the response body on a successful (2xx) response. Transport
/// failures, timeouts, and non-success statuses are all [`FetchError`];
/// callers decide how to degrade.
///
/// # Implementations
///
/// - [`crate::infrastructure::ReqwestFetcher`] - reqwest client with an
///   enforced per-request timeout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetches `url` with the given request headers.
    async fn fetch(&self, url: &str, headers: &[(String, String)]) -> Result<String, FetchError>;
}
