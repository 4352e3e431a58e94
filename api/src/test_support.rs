// Shared fixtures for unit tests

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::Value;
use serde_json::json;

use crate::entity::applications::{ApplicationRecord, ApplicationStatus};

/// A pending application created on 2026-10-19 at 10:00 UTC
pub fn sample_application(id: i32) -> ApplicationRecord {
    application_on(id, 2026, 10, 19)
}

/// A pending application created at 10:00 UTC on the given day
pub fn application_on(id: i32, year: i32, month: u32, day: u32) -> ApplicationRecord {
    application_at(
        id,
        Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
            .single()
            .expect("valid fixture date"),
    )
}

/// A pending application created at exactly `created_at`
pub fn application_at(id: i32, created_at: DateTime<Utc>) -> ApplicationRecord {
    ApplicationRecord {
        id,
        email: format!("founder{}@example.com", id),
        phone: "+1 555 0100".to_string(),
        website: Some(format!("https://startup{}.example.com", id)),
        startup_name: format!("Startup {}", id),
        team_size: "3".to_string(),
        sector: "Fintech".to_string(),
        description: "Payments for small merchants".to_string(),
        problem: "Card fees eat margins".to_string(),
        differentiation: "Flat pricing".to_string(),
        milestones: "Pilot with 10 merchants".to_string(),
        has_customer_validation: true,
        funding_secured: false,
        active_customers: 10,
        progress_percent: 40,
        investment_amount: Some("50000".to_string()),
        investment_type: Some("Equity".to_string()),
        valuation: None,
        support_requested: json!(["Funding", "Mentorship"]),
        has_pitch_deck: false,
        pitch_deck_mime_type: None,
        pitch_deck_filename: None,
        pitch_deck_size: None,
        status: ApplicationStatus::Pending,
        notes: None,
        created_at,
    }
}

/// The row the record query returns for `record`, for `MockDatabase` results
pub fn mock_row(record: &ApplicationRecord) -> BTreeMap<&'static str, Value> {
    let record = record.clone();
    BTreeMap::from([
        ("id", Value::from(record.id)),
        ("email", Value::from(record.email)),
        ("phone", Value::from(record.phone)),
        ("website", Value::from(record.website)),
        ("startup_name", Value::from(record.startup_name)),
        ("team_size", Value::from(record.team_size)),
        ("sector", Value::from(record.sector)),
        ("description", Value::from(record.description)),
        ("problem", Value::from(record.problem)),
        ("differentiation", Value::from(record.differentiation)),
        ("milestones", Value::from(record.milestones)),
        ("has_customer_validation", Value::from(record.has_customer_validation)),
        ("funding_secured", Value::from(record.funding_secured)),
        ("active_customers", Value::from(record.active_customers)),
        ("progress_percent", Value::from(record.progress_percent)),
        ("investment_amount", Value::from(record.investment_amount)),
        ("investment_type", Value::from(record.investment_type)),
        ("valuation", Value::from(record.valuation)),
        ("support_requested", Value::from(record.support_requested)),
        ("has_pitch_deck", Value::from(record.has_pitch_deck)),
        ("pitch_deck_mime_type", Value::from(record.pitch_deck_mime_type)),
        ("pitch_deck_filename", Value::from(record.pitch_deck_filename)),
        ("pitch_deck_size", Value::from(record.pitch_deck_size)),
        ("status", Value::from(record.status.as_str())),
        ("notes", Value::from(record.notes)),
        ("created_at", Value::from(record.created_at)),
    ])
}

/// Mock result set holding one row per record
pub fn mock_rows(records: &[ApplicationRecord]) -> Vec<BTreeMap<&'static str, Value>> {
    records.iter().map(mock_row).collect()
}
