//! Handlers for application authorization endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::UserSessionQuery;
use crate::application::services::AuthorizationModelOutcome;
use crate::domain::entities::UserAuthorizationData;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authorization model declared by an integration.
///
/// # Endpoint
///
/// `GET /v1/application/{configuration_id}/authorization`
///
/// # Response Codes
///
/// - **200 OK**: integration found, model returned
/// - **204 No Content**: integration found but declares no authorization model
/// - **404 Not Found**: no integration matches the configuration id
pub async fn authorization_model_handler(
    State(state): State<AppState>,
    Path(configuration_id): Path<String>,
) -> Response {
    match state
        .authorization
        .authorization_model(&configuration_id)
        .await
    {
        AuthorizationModelOutcome::Model(model) => (StatusCode::OK, Json(model)).into_response(),
        AuthorizationModelOutcome::NoContent => StatusCode::NO_CONTENT.into_response(),
        AuthorizationModelOutcome::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Returns the caller's authorization data for an integration, or a 401
/// response describing how far the authorization handshake has progressed.
///
/// # Endpoint
///
/// `GET /v1/application/{configuration_id}/authorization/userSession?url=<integration URL>`
///
/// # Response Codes
///
/// - **200 OK**: user has authorized; record returned
/// - **401 Unauthorized**: authorization pending or rejected; the body's
///   `properties` carry the partial handshake state
/// - **503 Service Unavailable**: integration unknown or not bootstrapped
pub async fn user_session_handler(
    State(state): State<AppState>,
    Path(configuration_id): Path<String>,
    Query(query): Query<UserSessionQuery>,
    headers: HeaderMap,
) -> Result<Json<UserAuthorizationData>, AppError> {
    let authorization_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let data = state
        .authorization
        .user_authorization_data(&configuration_id, &query.url, authorization_header)
        .await?;

    Ok(Json(data))
}
