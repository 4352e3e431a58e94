// Admin API error type and its mapping onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::db::DbError;
use crate::models::ApiResponse;
use crate::services::analytics::AggregationError;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Repository error: {0}")]
    Repository(String),
    #[error("Aggregation error: {0}")]
    Aggregation(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AdminError::Repository(_) | AdminError::Aggregation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller. Internal failures stay generic.
    fn public_message(&self) -> String {
        match self {
            AdminError::NotFound(msg) | AdminError::InvalidArgument(msg) => msg.clone(),
            AdminError::Repository(_) => "Failed to access applications".to_string(),
            AdminError::Aggregation(_) => "Failed to compute analytics".to_string(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AdminError::Repository(_) => tracing::error!("{}", self),
            AdminError::Aggregation(_) => tracing::error!("internal invariant violated: {}", self),
            _ => tracing::debug!("{}", self),
        }

        let body = Json(ApiResponse::<()>::failure(self.public_message()));
        (status, body).into_response()
    }
}

impl From<DbError> for AdminError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::RecordNotFound(id) => {
                AdminError::NotFound(format!("Application {} not found", id))
            }
            other => AdminError::Repository(other.to_string()),
        }
    }
}

impl From<AggregationError> for AdminError {
    fn from(err: AggregationError) -> Self {
        AdminError::Aggregation(err.to_string())
    }
}
