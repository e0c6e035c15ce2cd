//! API handlers

pub mod users;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;

/// Timestamp layout used in health responses
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: String,
    pub version: String,
}

/// Health check endpoint; never touches storage
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        time: Utc::now().format(TIME_FORMAT).to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
