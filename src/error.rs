//! Unified error types for the info service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors that can abort the server before it starts serving.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error (bind failure, socket teardown).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors rendered to the client as JSON.
///
/// The taxonomy is two-valued by contract: an unmatched route becomes a 404
/// with the requested path echoed back, and any handler fault becomes a 500
/// with the failure message surfaced to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matched the request.
    #[error("route not found: {path}")]
    NotFound {
        /// Requested path, including the query string when present.
        path: String,
    },

    /// A handler failed while building its response.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { path } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Route not found",
                    "path": path,
                })),
            )
                .into_response(),
            ApiError::Internal(message) => {
                error!("request failed: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Something went wrong!",
                        "message": message,
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<time::error::Format> for ApiError {
    fn from(err: time::error::Format) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Convenient Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
