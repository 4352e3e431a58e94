// Analytics snapshot service: fetch every application, then aggregate

use chrono::Utc;

use crate::error::AdminResult;
use crate::handlers::AppState;
use crate::services::analytics::{self, AnalyticsSnapshot};

/// Computes a fresh snapshot from the current application rows.
///
/// Nothing is cached; concurrent calls may see different rows if an update
/// lands between their reads.
pub async fn get_snapshot(state: &AppState) -> AdminResult<AnalyticsSnapshot> {
    let rows = state.repositories.application.find_all().await?;
    let today = Utc::now().date_naive();

    let snapshot = analytics::aggregate(&rows, today)?;
    tracing::debug!(
        "Analytics computed over {} applications",
        snapshot.total_applications
    );
    Ok(snapshot)
}
