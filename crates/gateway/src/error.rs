//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

/// Errors the HTTP boundary maps to status codes.
///
/// Dispatch-level failures are not represented here; they travel inside
/// the response body with HTTP 200.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer credential.
    #[error("Invalid authentication credentials")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => {
                warn!("Unauthorized request");
                let body = serde_json::json!({
                    "error": self.to_string()
                });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
        }
    }
}
