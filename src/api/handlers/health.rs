//! Handler for the service health endpoint.

use axum::{Json, extract::State};

use crate::api::dto::{ServiceHealth, ServicesHealthResponse};
use crate::state::AppState;

/// Returns the current connectivity verdict for every monitored service.
///
/// # Endpoint
///
/// `GET /v1/health/services`
///
/// # Response
///
/// ```json
/// {
///   "services": [
///     {
///       "serviceName": "key-manager-auth",
///       "displayName": "Key Manager Authentication",
///       "connectivity": "UP",
///       "minVersion": "1.55.0"
///     }
///   ]
/// }
/// ```
///
/// Services whose first check has not completed report `UNKNOWN`;
/// `minVersion` is absent until a current version has been established.
pub async fn services_health_handler(State(state): State<AppState>) -> Json<ServicesHealthResponse> {
    let services = state
        .monitor
        .snapshot()
        .await
        .into_iter()
        .map(ServiceHealth::from)
        .collect();

    Json(ServicesHealthResponse { services })
}
