// Individual derived metrics over application rows

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entity::applications::{ApplicationRecord as Application, ApplicationStatus};

use super::snapshot::{DailySubmission, RecentApplication, StatusBreakdown, StatusStat, TopSector};
use super::{DAILY_WINDOW_DAYS, NO_SECTOR, OVERSIZED_TEAM_VALUE, RECENT_APPLICATIONS_LIMIT};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `100 * count / total` to two decimals; zero when there is nothing to divide by
pub(crate) fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(100.0 * count as f64 / total as f64, 2)
}

pub(crate) fn status_breakdown(rows: &[Application]) -> StatusBreakdown {
    let total = rows.len() as u64;
    let count_of = |status: ApplicationStatus| rows.iter().filter(|r| r.status == status).count() as u64;
    let stat = |count: u64| StatusStat {
        count,
        percentage: percentage(count, total),
    };

    StatusBreakdown {
        approved: stat(count_of(ApplicationStatus::Approved)),
        pending: stat(count_of(ApplicationStatus::Pending)),
        rejected: stat(count_of(ApplicationStatus::Rejected)),
    }
}

/// Submissions per UTC calendar day for the window ending at `today`, oldest first
pub(crate) fn daily_submissions(rows: &[Application], today: NaiveDate) -> Vec<DailySubmission> {
    let start = today - Duration::days(DAILY_WINDOW_DAYS as i64 - 1);
    let mut counts = [0u64; DAILY_WINDOW_DAYS];

    for row in rows {
        let day = row.created_at.date_naive();
        if day < start || day > today {
            continue;
        }
        counts[(day - start).num_days() as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(offset, &count)| DailySubmission {
            date: start + Duration::days(offset as i64),
            count,
        })
        .collect()
}

/// Numeric headcount for a team-size token; ">6" is approximated as 7
pub(crate) fn team_size_value(token: &str) -> Option<u32> {
    let token = token.trim();
    if token == ">6" {
        return Some(OVERSIZED_TEAM_VALUE);
    }
    token.parse().ok()
}

pub(crate) fn average_team_size(rows: &[Application]) -> f64 {
    let mut sum = 0u64;
    let mut counted = 0u64;
    for row in rows {
        match team_size_value(&row.team_size) {
            Some(size) => {
                sum += u64::from(size);
                counted += 1;
            }
            None => tracing::warn!(
                "application {} has unrecognised team size '{}', skipped",
                row.id,
                row.team_size
            ),
        }
    }

    if counted == 0 {
        return 0.0;
    }
    round_to(sum as f64 / counted as f64, 1)
}

/// Parses a free-text amount such as "$1,200.50" by dropping everything
/// but digits and the decimal point
pub(crate) fn parse_funding_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

pub(crate) fn total_funding_requested(rows: &[Application]) -> Decimal {
    let mut total = Decimal::ZERO;
    for row in rows {
        let Some(raw) = row.investment_amount.as_deref() else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        match parse_funding_amount(raw).and_then(|amount| total.checked_add(amount)) {
            Some(sum) => total = sum,
            None => tracing::warn!(
                "application {} has unusable investment amount '{}', counted as 0",
                row.id,
                raw
            ),
        }
    }
    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Most common sector; on a tie the sector seen first wins
pub(crate) fn top_sector(rows: &[Application]) -> TopSector {
    let mut order: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let sector = row.sector.as_str();
        match index.get(sector) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(sector, order.len());
                order.push((sector, 1));
            }
        }
    }

    let mut best: Option<(&str, u64)> = None;
    for &(sector, count) in &order {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((sector, count));
        }
    }

    match best {
        Some((sector, count)) => TopSector {
            sector: sector.to_string(),
            percentage: percentage(count, rows.len() as u64),
        },
        None => TopSector {
            sector: NO_SECTOR.to_string(),
            percentage: 0.0,
        },
    }
}

/// Newest applications first; equal timestamps keep id order
pub(crate) fn recent_applications(rows: &[Application]) -> Vec<RecentApplication> {
    let mut newest: Vec<&Application> = rows.iter().collect();
    newest.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

    newest
        .into_iter()
        .take(RECENT_APPLICATIONS_LIMIT)
        .map(|row| RecentApplication {
            id: row.id,
            startup_name: row.startup_name.clone(),
            sector: row.sector.clone(),
            date: row.created_at.date_naive(),
            status: row.status,
        })
        .collect()
}
