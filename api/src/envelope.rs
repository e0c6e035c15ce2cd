//! Uniform JSON response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body shape shared by every response
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    /// Numeric HTTP status as a string, e.g. `"201"`
    pub status: String,
    pub message: String,
}

impl<T> Envelope<T> {
    /// Wrap a payload; the message is the status reason phrase
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            data: Some(data),
            status: status.as_u16().to_string(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

impl Envelope<()> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: status.as_u16().to_string(),
            message: message.into(),
        }
    }
}

/// Successful handler output, rendered through [`Envelope::success`]
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::success(self.status, self.data))).into_response()
    }
}
