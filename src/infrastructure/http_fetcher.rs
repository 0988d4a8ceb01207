//! reqwest-backed HTTP fetcher with an enforced per-request timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::collaborators::{FetchError, HttpFetcher};

/// HTTP fetcher over a shared [`reqwest::Client`].
///
/// Every request is bounded by the configured timeout; a stalled remote is
/// reported as [`FetchError::Timeout`] instead of hanging the caller.
pub struct ReqwestFetcher {
    client: Client,
    timeout: Duration,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str, headers: &[(String, String)]) -> Result<String, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout.as_secs())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
