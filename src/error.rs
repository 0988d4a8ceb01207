use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Wire shape for error responses.
///
/// The numeric status is repeated in the body because integration clients
/// read it from there when continuing an authorization handshake.
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// User has not completed (or failed) an integration's authorization flow.
    /// Carries the authorization properties known at rejection time so the
    /// caller can continue the handshake instead of starting over.
    Unauthorized {
        message: String,
        properties: Map<String, Value>,
    },
    /// Requested integration is unknown or not yet bootstrapped.
    Unavailable { message: String, solution: String },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            properties,
        }
    }
    pub fn unavailable(message: impl Into<String>, solution: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            solution: solution.into(),
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, solution, properties, details) = match self {
            AppError::Unauthorized {
                message,
                properties,
            } => (
                StatusCode::UNAUTHORIZED,
                message,
                None,
                Some(properties),
                Value::Null,
            ),
            AppError::Unavailable { message, solution } => (
                StatusCode::SERVICE_UNAVAILABLE,
                message,
                Some(solution),
                None,
                Value::Null,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, message, None, None, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                None,
                None,
                details,
            ),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
            solution,
            properties,
            details,
        };

        (status, Json(body)).into_response()
    }
}
