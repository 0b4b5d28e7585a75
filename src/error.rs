//! Error types for the admin API boundary
//!
//! The cache itself has no failure modes: a miss is a normal outcome and
//! capacity overflow silently evicts. Errors only exist where HTTP
//! requests are parsed and served.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Errors surfaced by the admin HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid or missing request fields
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the admin handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
