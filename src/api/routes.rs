//! API route configuration.

use axum::{Router, routing::get};

use crate::api::handlers::{
    authorization_model_handler, services_health_handler, user_session_handler,
};
use crate::state::AppState;

/// Versioned API routes.
///
/// # Endpoints
///
/// - `GET /application/{configuration_id}/authorization`             - declared authorization model
/// - `GET /application/{configuration_id}/authorization/userSession` - per-user authorization state
/// - `GET /health/services`                                          - monitored service health
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/application/{configuration_id}/authorization",
            get(authorization_model_handler),
        )
        .route(
            "/application/{configuration_id}/authorization/userSession",
            get(user_session_handler),
        )
        .route("/health/services", get(services_health_handler))
}
