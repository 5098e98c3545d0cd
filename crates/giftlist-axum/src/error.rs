//! Axum-specific error types and mappings.
//!
//! Only the JSON API surfaces errors. The HTML routes absorb every failure
//! and always redirect or render.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use giftlist_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The gift store could not be reached.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            // The buy route answers `{"bought": false}` for bad ids instead
            CoreError::InvalidIdentifier(raw) => {
                Self::Internal(format!("Invalid gift identifier: {raw:?}"))
            }
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            RepositoryError::Schema(msg) => Self::Internal(format!("Schema: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}
