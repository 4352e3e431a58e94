// Analytics snapshot types and the output validation boundary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::entity::applications::ApplicationStatus;

use super::{DAILY_WINDOW_DAYS, RECENT_APPLICATIONS_LIMIT};

/// A snapshot that breaks one of its own invariants. Always a bug, never bad input.
#[derive(Debug, Error, PartialEq)]
pub enum AggregationError {
    #[error("daily submissions window is malformed: {0}")]
    DailyWindow(String),
    #[error("{field} percentage {value} is outside 0..=100")]
    PercentageOutOfRange { field: &'static str, value: f64 },
    #[error("status counts sum to {counted}, expected {total}")]
    StatusCountMismatch { counted: u64, total: u64 },
    #[error("{0} recent applications exceeds the limit")]
    TooManyRecent(usize),
    #[error("{field} is negative or not finite: {value}")]
    InvalidMetric { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusStat {
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBreakdown {
    pub approved: StatusStat,
    pub pending: StatusStat,
    pub rejected: StatusStat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySubmission {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSector {
    pub sector: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentApplication {
    pub id: i32,
    pub startup_name: String,
    pub sector: String,
    pub date: NaiveDate,
    pub status: ApplicationStatus,
}

/// Summary statistics over the whole application collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_applications: u64,
    pub status_breakdown: StatusBreakdown,
    pub daily_submissions: Vec<DailySubmission>,
    pub average_team_size: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_funding_requested: Decimal,
    pub top_sector: TopSector,
    pub recent_applications: Vec<RecentApplication>,
}

fn check_percentage(field: &'static str, value: f64) -> Result<(), AggregationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(AggregationError::PercentageOutOfRange { field, value })
    }
}

impl AnalyticsSnapshot {
    /// Checks the assembled snapshot before it leaves the aggregator
    pub fn validate(&self) -> Result<(), AggregationError> {
        let breakdown = &self.status_breakdown;
        check_percentage("approved", breakdown.approved.percentage)?;
        check_percentage("pending", breakdown.pending.percentage)?;
        check_percentage("rejected", breakdown.rejected.percentage)?;
        check_percentage("top_sector", self.top_sector.percentage)?;

        let counted = breakdown.approved.count + breakdown.pending.count + breakdown.rejected.count;
        if counted != self.total_applications {
            return Err(AggregationError::StatusCountMismatch {
                counted,
                total: self.total_applications,
            });
        }

        if self.daily_submissions.len() != DAILY_WINDOW_DAYS {
            return Err(AggregationError::DailyWindow(format!(
                "expected {} days, got {}",
                DAILY_WINDOW_DAYS,
                self.daily_submissions.len()
            )));
        }
        for pair in self.daily_submissions.windows(2) {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(AggregationError::DailyWindow(format!(
                    "{} is not followed by the next day ({})",
                    pair[0].date, pair[1].date
                )));
            }
        }
        let in_window: u64 = self.daily_submissions.iter().map(|d| d.count).sum();
        if in_window > self.total_applications {
            return Err(AggregationError::DailyWindow(format!(
                "{} daily submissions exceed {} applications",
                in_window, self.total_applications
            )));
        }

        if self.recent_applications.len() > RECENT_APPLICATIONS_LIMIT {
            return Err(AggregationError::TooManyRecent(self.recent_applications.len()));
        }

        if !self.average_team_size.is_finite() || self.average_team_size < 0.0 {
            return Err(AggregationError::InvalidMetric {
                field: "average_team_size",
                value: self.average_team_size.to_string(),
            });
        }
        if self.total_funding_requested.is_sign_negative() {
            return Err(AggregationError::InvalidMetric {
                field: "total_funding_requested",
                value: self.total_funding_requested.to_string(),
            });
        }

        Ok(())
    }
}
