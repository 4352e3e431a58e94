// Handlers for application-related API endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::error::{AdminError, AdminResult};
use crate::handlers::AppState;
use crate::models::{
    ApiResponse, ApplicationListQuery, ApplicationView, UpdateApplicationRequest,
    UpdateStatusRequest,
};
use crate::services::application_service;

fn invalid_body(rejection: JsonRejection) -> AdminError {
    AdminError::InvalidArgument(rejection.body_text())
}

fn invalid_query(rejection: QueryRejection) -> AdminError {
    AdminError::InvalidArgument(rejection.body_text())
}

/// Handler for GET /applications - Returns every application, optionally filtered
pub async fn list_applications(
    State(state): State<AppState>,
    query: Result<Query<ApplicationListQuery>, QueryRejection>,
) -> AdminResult<Json<ApiResponse<Vec<ApplicationView>>>> {
    let Query(params) = query.map_err(invalid_query)?;
    let applications = application_service::list_applications_filtered(&state, &params).await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// Handler for GET /applications/{id} - Returns a single application
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<ApiResponse<ApplicationView>>> {
    let application = application_service::get_application_by_id(&state, &id).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// Handler for PATCH /applications/{id} - Updates status and/or notes
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateApplicationRequest>, JsonRejection>,
) -> AdminResult<Json<ApiResponse<ApplicationView>>> {
    let Json(request) = payload.map_err(invalid_body)?;
    let application =
        application_service::update_application_details(&state, &id, &request).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// Handler for PUT /applications/{id}/status - Sets the review status
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AdminResult<Json<ApiResponse<ApplicationView>>> {
    let Json(request) = payload.map_err(invalid_body)?;
    let application =
        application_service::update_application_status(&state, &id, &request.status).await?;
    Ok(Json(ApiResponse::ok(application)))
}
