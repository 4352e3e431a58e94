// Application listing, lookup and admin updates

use crate::db::repositories::ApplicationChanges;
use crate::entity::applications::ApplicationStatus;
use crate::error::{AdminError, AdminResult};
use crate::handlers::AppState;
use crate::models::{ApplicationListQuery, ApplicationView, UpdateApplicationRequest};

/// Parses a path id; only positive integers are accepted
pub fn parse_application_id(raw: &str) -> AdminResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AdminError::InvalidArgument(format!(
            "'{}' is not a valid application id",
            raw
        ))),
    }
}

fn parse_status(raw: &str) -> AdminResult<ApplicationStatus> {
    ApplicationStatus::parse(raw).ok_or_else(|| {
        AdminError::InvalidArgument(format!(
            "'{}' is not a valid status (expected pending, approved or rejected)",
            raw
        ))
    })
}

/// Dashboard filter applied to the full, already validated list
#[derive(Debug, Default)]
struct ApplicationFilter {
    status: Option<ApplicationStatus>,
    sector: Option<String>,
    search: Option<String>,
}

impl ApplicationFilter {
    fn from_query(query: &ApplicationListQuery) -> AdminResult<Self> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_lowercase)
        };

        let status = match non_empty(&query.status) {
            Some(status) => Some(parse_status(&status)?),
            None => None,
        };

        Ok(ApplicationFilter {
            status,
            sector: non_empty(&query.sector),
            search: non_empty(&query.search),
        })
    }

    fn matches(&self, view: &ApplicationView) -> bool {
        if let Some(status) = self.status {
            if view.status != status {
                return false;
            }
        }
        if let Some(sector) = &self.sector {
            if view.sector.to_lowercase() != *sector {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !view.startup_name.to_lowercase().contains(search.as_str())
                && !view.email.to_lowercase().contains(search.as_str())
            {
                return false;
            }
        }
        true
    }
}

/// Returns every application as a view. One invalid row fails the whole call.
pub async fn list_applications(state: &AppState) -> AdminResult<Vec<ApplicationView>> {
    let rows = state.repositories.application.find_all().await?;
    let views = rows
        .into_iter()
        .map(ApplicationView::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(views)
}

/// Lists applications narrowed by the dashboard's optional filters
pub async fn list_applications_filtered(
    state: &AppState,
    query: &ApplicationListQuery,
) -> AdminResult<Vec<ApplicationView>> {
    let filter = ApplicationFilter::from_query(query)?;
    let views = list_applications(state).await?;
    Ok(views.into_iter().filter(|view| filter.matches(view)).collect())
}

pub async fn get_application_by_id(state: &AppState, raw_id: &str) -> AdminResult<ApplicationView> {
    let id = parse_application_id(raw_id)?;
    let application = state
        .repositories
        .application
        .find_by_id(id)
        .await?
        .ok_or_else(|| AdminError::NotFound(format!("Application {} not found", id)))?;

    Ok(ApplicationView::try_from(application)?)
}

pub async fn update_application_status(
    state: &AppState,
    raw_id: &str,
    raw_status: &str,
) -> AdminResult<ApplicationView> {
    let request = UpdateApplicationRequest {
        status: Some(raw_status.to_string()),
        notes: None,
    };
    update_application_details(state, raw_id, &request).await
}

/// Applies the supplied status and/or notes; absent fields are left alone
pub async fn update_application_details(
    state: &AppState,
    raw_id: &str,
    request: &UpdateApplicationRequest,
) -> AdminResult<ApplicationView> {
    let id = parse_application_id(raw_id)?;

    let changes = ApplicationChanges {
        status: request.status.as_deref().map(parse_status).transpose()?,
        notes: request.notes.as_ref().map(|notes| {
            let trimmed = notes.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }),
    };
    if changes.is_empty() {
        return Err(AdminError::InvalidArgument(
            "update must include a status or notes".to_string(),
        ));
    }

    let updated = state.repositories.application.update(id, changes).await?;
    tracing::info!(
        "Application {} updated (status: {})",
        updated.id,
        updated.status.as_str()
    );

    Ok(ApplicationView::try_from(updated)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Repositories;
    use crate::entity::applications;
    use crate::handlers::ApiState;
    use crate::test_support::{mock_row, mock_rows, sample_application};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;
    use std::sync::Arc;

    fn state(db: MockDatabase) -> AppState {
        Arc::new(ApiState {
            repositories: Repositories::new(Arc::new(db.into_connection())),
        })
    }

    fn updated_one() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn query(status: Option<&str>, sector: Option<&str>, search: Option<&str>) -> ApplicationListQuery {
        ApplicationListQuery {
            status: status.map(str::to_string),
            sector: sector.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn application_ids_must_be_positive_integers() {
        assert_eq!(parse_application_id("17").unwrap(), 17);
        assert_eq!(parse_application_id(" 3 ").unwrap(), 3);
        for raw in ["0", "-4", "abc", "", "1.5", "99999999999"] {
            assert!(
                matches!(parse_application_id(raw), Err(AdminError::InvalidArgument(_))),
                "{} should be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn listing_fails_closed_on_invalid_row() {
        let mut bad = sample_application(2);
        bad.support_requested = json!(["Legal"]);
        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([mock_rows(&[sample_application(1), bad])]),
        );

        let result = list_applications(&state).await;
        assert!(matches!(result, Err(AdminError::Repository(_))));
    }

    #[tokio::test]
    async fn filters_narrow_the_list() {
        let mut approved = sample_application(1);
        approved.status = ApplicationStatus::Approved;
        approved.startup_name = "GreenRoots".to_string();
        approved.sector = "Agritech".to_string();
        let pending = sample_application(2);

        let rows = vec![approved, pending];
        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    mock_rows(&rows),
                    mock_rows(&rows),
                    mock_rows(&rows),
                    mock_rows(&rows),
                ]),
        );

        let by_status = list_applications_filtered(&state, &query(Some("approved"), None, None))
            .await
            .unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, "1");

        let by_sector = list_applications_filtered(&state, &query(None, Some("FINTECH"), None))
            .await
            .unwrap();
        assert_eq!(by_sector.len(), 1);
        assert_eq!(by_sector[0].id, "2");

        let by_search = list_applications_filtered(&state, &query(None, None, Some("roots")))
            .await
            .unwrap();
        assert_eq!(by_search.len(), 1);

        let unfiltered = list_applications_filtered(&state, &ApplicationListQuery::default())
            .await
            .unwrap();
        assert_eq!(unfiltered.len(), 2);
    }

    #[tokio::test]
    async fn unknown_status_filter_is_invalid() {
        let state = state(MockDatabase::new(DatabaseBackend::Postgres));
        let result = list_applications_filtered(&state, &query(Some("archived"), None, None)).await;
        assert!(matches!(result, Err(AdminError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn missing_application_is_not_found() {
        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<applications::Model>::new()]),
        );

        let result = get_application_by_id(&state, "404").await;
        assert!(matches!(result, Err(AdminError::NotFound(_))));
    }

    #[tokio::test]
    async fn updating_missing_application_is_not_found() {
        let state = state(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        let result = update_application_status(&state, "404", "approved").await;
        assert!(matches!(result, Err(AdminError::NotFound(_))));
    }

    #[tokio::test]
    async fn status_update_is_visible_on_next_fetch() {
        let mut approved = sample_application(7);
        approved.status = ApplicationStatus::Approved;

        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([updated_one()])
                .append_query_results([vec![mock_row(&approved)], vec![mock_row(&approved)]]),
        );

        let updated = update_application_status(&state, "7", "approved").await.unwrap();
        assert_eq!(updated.status, ApplicationStatus::Approved);

        let fetched = get_application_by_id(&state, "7").await.unwrap();
        assert_eq!(fetched.status, ApplicationStatus::Approved);
        assert_eq!(fetched.created_at, "2026-10-19");
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_touching_the_store() {
        let state = state(MockDatabase::new(DatabaseBackend::Postgres));
        let result = update_application_details(&state, "7", &UpdateApplicationRequest::default()).await;
        assert!(matches!(result, Err(AdminError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn invalid_status_value_is_rejected() {
        let state = state(MockDatabase::new(DatabaseBackend::Postgres));
        let result = update_application_status(&state, "7", "maybe").await;
        assert!(matches!(result, Err(AdminError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn blank_notes_clear_the_note() {
        let cleared = sample_application(3);

        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([updated_one()])
                .append_query_results([vec![mock_row(&cleared)]]),
        );

        let request = UpdateApplicationRequest {
            status: None,
            notes: Some("   ".to_string()),
        };
        let view = update_application_details(&state, "3", &request).await.unwrap();
        assert_eq!(view.notes, None);
        assert_eq!(view.status, ApplicationStatus::Pending);
    }
}
