// Analytics aggregation over the full application collection.
//
// Pure and stateless: the same rows and the same `today` always produce the
// same snapshot. Day boundaries are UTC calendar days.

mod metrics;
mod snapshot;

pub use snapshot::{AggregationError, AnalyticsSnapshot};

use chrono::NaiveDate;

use crate::entity::applications::ApplicationRecord as Application;

/// Number of trailing days reported in `daily_submissions`, today included
pub const DAILY_WINDOW_DAYS: usize = 7;
/// Number of rows reported in `recent_applications`
pub const RECENT_APPLICATIONS_LIMIT: usize = 5;
/// Headcount used for the ">6" team-size token
pub const OVERSIZED_TEAM_VALUE: u32 = 7;
/// Sector label reported when there are no applications
pub const NO_SECTOR: &str = "None";

/// Derives the analytics snapshot for `rows` as seen on `today` (UTC)
pub fn aggregate(
    rows: &[Application],
    today: NaiveDate,
) -> Result<AnalyticsSnapshot, AggregationError> {
    let snapshot = AnalyticsSnapshot {
        total_applications: rows.len() as u64,
        status_breakdown: metrics::status_breakdown(rows),
        daily_submissions: metrics::daily_submissions(rows, today),
        average_team_size: metrics::average_team_size(rows),
        total_funding_requested: metrics::total_funding_requested(rows),
        top_sector: metrics::top_sector(rows),
        recent_applications: metrics::recent_applications(rows),
    };

    snapshot.validate()?;
    Ok(snapshot)
}
