use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pinhole_core::ShortenError;
use serde_json::json;
use tracing::error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors surfaced to HTTP clients.
///
/// The status-code mapping for the whole service lives here; the core
/// propagates its error kinds verbatim and this boundary translates them.
#[derive(Debug)]
pub enum GatewayError {
    /// Empty or malformed URL in the request (400).
    InvalidRequest(String),
    /// Unknown short id (404).
    NotFound,
    /// Unresolvable mapping conflict (409).
    Conflict(String),
    /// Anything else (500).
    Unexpected(String),
}

impl From<ShortenError> for GatewayError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidUrl(msg) => Self::InvalidRequest(msg),
            ShortenError::Conflict(msg) => Self::Conflict(msg),
            ShortenError::Unexpected(msg) => Self::Unexpected(msg),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            GatewayError::NotFound => (
                StatusCode::NOT_FOUND,
                "shortened url not found".to_string(),
            ),
            GatewayError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            GatewayError::Unexpected(msg) => {
                error!(error = %msg, "request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
