//! Request-scoped authorization flows for integration applications.

use std::sync::Arc;

use serde_json::{Map, json};
use tracing::warn;

use crate::domain::collaborators::{
    AuthorizationStore, IntegrationRegistry, JwtClaimsResolver, MessageSource, SessionProvider,
};
use crate::domain::entities::{AppAuthorizationModel, UserAuthorizationData};
use crate::error::AppError;

/// Message key for an unknown or unavailable integration.
pub const INTEGRATION_UNAVAILABLE: &str = "integration.web.integration.unavailable";

/// Remediation hint companion to [`INTEGRATION_UNAVAILABLE`].
pub const INTEGRATION_UNAVAILABLE_SOLUTION: &str =
    "integration.web.integration.unavailable.solution";

/// Outcome of the authorization-model read.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationModelOutcome {
    /// The integration declares an authorization model.
    Model(AppAuthorizationModel),
    /// The integration exists but authorizes no one individually.
    NoContent,
    /// No integration matches the configuration id.
    NotFound,
}

/// Composes the session provider, remote authorization store, and the
/// integration's own verification into one request-scoped flow.
///
/// Stateless across requests; never touches health records.
pub struct AuthorizationService {
    registry: Arc<dyn IntegrationRegistry>,
    sessions: Arc<dyn SessionProvider>,
    store: Arc<dyn AuthorizationStore>,
    jwt: Arc<dyn JwtClaimsResolver>,
    messages: Arc<dyn MessageSource>,
}

impl AuthorizationService {
    pub fn new(
        registry: Arc<dyn IntegrationRegistry>,
        sessions: Arc<dyn SessionProvider>,
        store: Arc<dyn AuthorizationStore>,
        jwt: Arc<dyn JwtClaimsResolver>,
        messages: Arc<dyn MessageSource>,
    ) -> Self {
        Self {
            registry,
            sessions,
            store,
            jwt,
            messages,
        }
    }

    /// Declared authorization model of an integration.
    ///
    /// A read-only companion to the user-session flow: an unknown
    /// configuration id is an ordinary "not found" outcome here, not an
    /// error.
    pub async fn authorization_model(&self, configuration_id: &str) -> AuthorizationModelOutcome {
        let Some(integration) = self.registry.integration_by_id(configuration_id).await else {
            return AuthorizationModelOutcome::NotFound;
        };

        match integration.authorization_model() {
            Some(model) => AuthorizationModelOutcome::Model(model),
            None => AuthorizationModelOutcome::NoContent,
        }
    }

    /// Resolves the caller's authorization state for one integration.
    ///
    /// # Flow
    ///
    /// 1. Resolve the user id from the `Authorization` header.
    /// 2. Look up the integration; unknown ids surface as
    ///    [`AppError::Unavailable`] with message and remediation hint.
    /// 3. Resolve a session token for the integration's service type.
    /// 4. Fetch the stored authorization record; an absent record (or a
    ///    failed lookup) synthesizes a fresh one with empty properties —
    ///    the expected "not yet authorized" path, never an error.
    /// 5. Ask the integration to verify the record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] carrying the record's properties
    /// when verification rejects it, so the caller can continue the
    /// handshake rather than starting over.
    pub async fn user_authorization_data(
        &self,
        configuration_id: &str,
        integration_url: &str,
        authorization_header: Option<&str>,
    ) -> Result<UserAuthorizationData, AppError> {
        let user_id = self
            .jwt
            .user_id_from_authorization_header(authorization_header)
            .map_err(|e| AppError::unauthorized(e.to_string(), Map::new()))?;

        let Some(integration) = self.registry.integration_by_id(configuration_id).await else {
            warn!(configuration_id, "integration unavailable");
            let message = self
                .messages
                .message(INTEGRATION_UNAVAILABLE, &[configuration_id.to_string()]);
            let solution = self.messages.message(INTEGRATION_UNAVAILABLE_SOLUTION, &[]);
            return Err(AppError::unavailable(message, solution));
        };

        let session_token = self
            .sessions
            .session_token(&integration.integration_type())
            .await
            .map_err(|e| {
                AppError::internal(
                    e.to_string(),
                    json!({ "configurationId": configuration_id }),
                )
            })?;

        let data = match self
            .store
            .user_auth_data(&session_token, configuration_id, user_id, integration_url)
            .await
        {
            Ok(Some(data)) => data,
            Ok(None) => UserAuthorizationData::new(user_id, integration_url),
            Err(e) => {
                // A store that cannot answer is indistinguishable from one
                // holding no record; the caller sees the same pending state.
                warn!(
                    configuration_id,
                    "authorization data lookup failed, treating as absent: {e}"
                );
                UserAuthorizationData::new(user_id, integration_url)
            }
        };

        match integration.verify_user_authorization_data(&data).await {
            Ok(()) => Ok(data),
            Err(e) => Err(AppError::unauthorized(e.message, data.properties)),
        }
    }
}
