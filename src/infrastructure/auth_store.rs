//! HTTP client for the remote authorization store on the primary platform.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::collaborators::{AuthorizationStore, FetchError, HttpFetcher};
use crate::domain::entities::UserAuthorizationData;

/// Header carrying the caller's session token on platform API calls.
const SESSION_TOKEN_HEADER: &str = "sessionToken";

/// Authorization store backed by the platform's integration API.
pub struct RemoteAuthorizationStore {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
}

impl RemoteAuthorizationStore {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    fn user_auth_data_url(
        &self,
        configuration_id: &str,
        user_id: i64,
        integration_url: &str,
    ) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!(
            "{}/v1/configuration/{}/authorization/user",
            self.base_url, configuration_id
        ))
        .map_err(|e| FetchError::Network(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string())
            .append_pair("url", integration_url);

        Ok(url)
    }
}

#[async_trait]
impl AuthorizationStore for RemoteAuthorizationStore {
    async fn user_auth_data(
        &self,
        session_token: &str,
        configuration_id: &str,
        user_id: i64,
        url: &str,
    ) -> Result<Option<UserAuthorizationData>, FetchError> {
        let request_url = self.user_auth_data_url(configuration_id, user_id, url)?;
        let headers = [(
            SESSION_TOKEN_HEADER.to_string(),
            session_token.to_string(),
        )];

        match self.fetcher.fetch(request_url.as_str(), &headers).await {
            Ok(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| FetchError::Network(format!("invalid authorization payload: {e}"))),
            // The store answers 404 for users that never authorized.
            Err(FetchError::Status(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
