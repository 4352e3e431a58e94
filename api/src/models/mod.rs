// API request/response models

mod application;

pub use application::ApplicationView;

use serde::{Deserialize, Serialize};

/// Envelope shared by every endpoint: `data` on success, `message` on failure
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Query parameters for GET /applications
#[derive(Debug, Deserialize, Default)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
    pub sector: Option<String>,
    pub search: Option<String>,
}

/// Request body for PATCH /applications/{id}
///
/// An empty `notes` string clears the note.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateApplicationRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Request body for PUT /applications/{id}/status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Response body for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
