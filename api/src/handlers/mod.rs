// Handlers Module
// This module contains the API endpoint handlers and the route table

pub mod analytics;
pub mod applications;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, put, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::db::Repositories;

pub use analytics::get_analytics;
pub use applications::{
    get_application, list_applications, update_application, update_application_status,
};
pub use health::health_check;

/// Shared per-process state; the store handle lives inside the repositories
pub struct ApiState {
    pub repositories: Repositories,
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;

// Update payloads are a status and a short note
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the API routes over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analytics", get(get_analytics))
        .route("/applications", get(list_applications))
        .route(
            "/applications/{id}",
            get(get_application).patch(update_application),
        )
        .route("/applications/{id}/status", put(update_application_status))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::applications::{self as application_entity, ApplicationStatus};
    use crate::test_support::{mock_row, mock_rows, sample_application};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(db: MockDatabase) -> Router {
        router(Arc::new(ApiState {
            repositories: Repositories::new(Arc::new(db.into_connection())),
        }))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn updated_one() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_wraps_views_in_envelope() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([mock_rows(&[sample_application(1), sample_application(2)])]);

        let (status, body) = send(app(db), get_request("/applications")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["id"], "1");
        assert_eq!(body["data"][0]["has_customer_validation"], "Yes");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn malformed_query_string_uses_envelope() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let (status, body) = send(
            app(db),
            get_request("/applications?status=pending&status=approved"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("status"));
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let (status, body) = send(app(db), get_request("/applications/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_envelope() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<application_entity::Model>::new()]);

        let (status, body) = send(app(db), get_request("/applications/31")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn status_route_updates_application() {
        let mut rejected = sample_application(4);
        rejected.status = ApplicationStatus::Rejected;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([updated_one()])
            .append_query_results([vec![mock_row(&rejected)]]);

        let (status, body) = send(
            app(db),
            json_request("PUT", "/applications/4/status", r#"{"status":"rejected"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "rejected");
        assert_eq!(body["data"]["created_at"], "2026-10-19");
    }

    #[tokio::test]
    async fn patch_with_notes_only_keeps_status() {
        let mut noted = sample_application(9);
        noted.notes = Some("Strong team".to_string());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([updated_one()])
            .append_query_results([vec![mock_row(&noted)]]);

        let (status, body) = send(
            app(db),
            json_request("PATCH", "/applications/9", r#"{"notes":"Strong team"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["notes"], "Strong team");
        assert_eq!(body["data"]["status"], "pending");
    }

    #[tokio::test]
    async fn malformed_update_body_is_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let (status, body) = send(
            app(db),
            json_request("PATCH", "/applications/9", r#"{"status": 5"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn analytics_route_returns_snapshot() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([mock_rows(&[sample_application(1)])]);

        let (status, body) = send(app(db), get_request("/analytics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total_applications"], 1);
        assert_eq!(body["data"]["daily_submissions"].as_array().unwrap().len(), 7);
        assert_eq!(body["data"]["top_sector"]["sector"], "Fintech");
    }

    #[tokio::test]
    async fn store_failure_message_is_generic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("password authentication failed".into())]);

        let (status, body) = send(app(db), get_request("/analytics")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to access applications");
    }
}
