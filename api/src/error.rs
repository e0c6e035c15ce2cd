//! API error types

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error, warn};
use user_crud_core::CoreError;

use crate::envelope::Envelope;

/// Message returned for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid user id: {0}")]
    InvalidId(String),

    #[error("User id out of range: {0}")]
    UnknownId(i64),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Status code and client-facing message
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request payload"),
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid user id"),
            ApiError::UnknownId(_) | ApiError::Core(CoreError::UserNotFound(_)) => {
                (StatusCode::NOT_FOUND, "User not found")
            }
            ApiError::Core(CoreError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();

        if status.is_server_error() {
            match &self {
                ApiError::Core(core) if core.is_unique_violation() => {
                    error!(error = %self, "Unique constraint violated");
                }
                _ => {
                    error!(error = %self, "Request failed");
                }
            }
        } else if status == StatusCode::NOT_FOUND {
            debug!(error = %self, "Resource not found");
        } else {
            warn!(error = %self, "Rejected request");
        }

        (status, Json(Envelope::error(status, message))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
