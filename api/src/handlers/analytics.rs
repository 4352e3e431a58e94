// Handler for the admin dashboard analytics endpoint

use axum::{extract::State, Json};

use crate::error::AdminResult;
use crate::handlers::AppState;
use crate::models::ApiResponse;
use crate::services::analytics::AnalyticsSnapshot;
use crate::services::analytics_service;

/// Handler for GET /analytics - Returns a freshly computed snapshot
pub async fn get_analytics(
    State(state): State<AppState>,
) -> AdminResult<Json<ApiResponse<AnalyticsSnapshot>>> {
    let snapshot = analytics_service::get_snapshot(&state).await?;
    Ok(Json(ApiResponse::ok(snapshot)))
}
