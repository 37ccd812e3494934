//! Error types for the prayer gateway
//!
//! Provides the fetch error taxonomy using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for prayer retrieval.
///
/// Cache problems never appear here: cache read failures degrade to a
/// miss and cache write failures skip caching, both logged only.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level generation failure, surfaced once retries are exhausted
    #[error("Generation unavailable: {0}")]
    Transient(String),

    /// Generation response failed shape validation (terminal, never retried)
    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),

    /// The caller's cancellation signal was raised before completion
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FetchError::Transient(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            FetchError::InvalidResponse(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            // Cancellation means a newer request superseded this one
            FetchError::Cancelled => (StatusCode::CONFLICT, self.to_string()),
            FetchError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            FetchError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
