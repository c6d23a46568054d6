//! Error types for groupie-server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested artist does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request parameter (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upstream API failed (502)
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map an engine error from a by-id lookup
    ///
    /// Only here does `NotFound` mean the client asked for something that
    /// does not exist.
    pub fn from_lookup(err: groupie_common::Error) -> Self {
        match err {
            groupie_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::from(other),
        }
    }
}

impl From<groupie_common::Error> for ApiError {
    /// `NotFound` while filtering is a correlation inconsistency in the
    /// upstream data, so it maps to 500.
    fn from(err: groupie_common::Error) -> Self {
        use groupie_common::Error;
        match err {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Fetch(msg) => ApiError::Upstream(msg),
            Error::NotFound(msg) => {
                ApiError::Internal(format!("inconsistent upstream data: {}", msg))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
