// Health check endpoint handler implementation

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::AppState;
use crate::models::{ApiResponse, HealthResponse};
use crate::services::health::HealthChecker;

/// Handler for GET /health - Reports liveness and database reachability
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    if HealthChecker::new(&state).check().await {
        let body = HealthResponse {
            status: "ok",
            database: "ok",
        };
        (StatusCode::OK, Json(ApiResponse::ok(body)))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failure("Database unavailable")),
        )
    }
}
