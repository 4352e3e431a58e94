// Client-facing view of a stored application

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::entity::applications::{ApplicationRecord, ApplicationStatus};

/// Kind of help an applicant can ask the accelerator for
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupportCategory {
    Funding,
    Resources,
    Mentorship,
    Marketing,
}

impl SupportCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "funding" => Some(SupportCategory::Funding),
            "resources" => Some(SupportCategory::Resources),
            "mentorship" => Some(SupportCategory::Mentorship),
            "marketing" => Some(SupportCategory::Marketing),
            _ => None,
        }
    }
}

/// Pitch deck metadata; the payload itself is never sent in a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchDeckInfo {
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<String>,
}

/// Application as presented to the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub startup_name: String,
    pub team_size: String,
    pub sector: String,
    pub description: String,
    pub problem: String,
    pub differentiation: String,
    pub milestones: String,
    pub has_customer_validation: String,
    pub funding_secured: String,
    pub active_customers: String,
    pub progress_percent: String,
    pub investment_amount: Option<String>,
    pub investment_type: Option<String>,
    pub valuation: Option<String>,
    pub support_requested: Vec<SupportCategory>,
    pub has_pitch_deck: String,
    pub pitch_deck: Option<PitchDeckInfo>,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub created_at: String,
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Reads the stored support list, rejecting unknown categories
fn parse_support_requested(value: &serde_json::Value) -> Result<Vec<SupportCategory>, String> {
    let entries = match value {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(entries) => entries,
        other => return Err(format!("support_requested is not a list: {}", other)),
    };

    let mut categories = BTreeSet::new();
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or_else(|| format!("support category is not a string: {}", entry))?;
        let category = SupportCategory::parse(name)
            .ok_or_else(|| format!("unknown support category '{}'", name))?;
        categories.insert(category);
    }

    Ok(categories.into_iter().collect())
}

impl TryFrom<ApplicationRecord> for ApplicationView {
    type Error = DbError;

    fn try_from(app: ApplicationRecord) -> Result<Self, Self::Error> {
        let id = app.id;
        let invalid = move |reason: String| DbError::InvalidRecord { id, reason };

        if !(0..=100).contains(&app.progress_percent) {
            return Err(invalid(format!(
                "progress_percent {} outside 0..=100",
                app.progress_percent
            )));
        }
        if app.active_customers < 0 {
            return Err(invalid(format!(
                "active_customers {} is negative",
                app.active_customers
            )));
        }
        let support_requested = parse_support_requested(&app.support_requested).map_err(invalid)?;

        let has_pitch_deck = app.has_pitch_deck;
        let pitch_deck = if has_pitch_deck || app.pitch_deck_filename.is_some() {
            Some(PitchDeckInfo {
                filename: app.pitch_deck_filename,
                mime_type: app.pitch_deck_mime_type,
                size: app.pitch_deck_size.map(|size| size.to_string()),
            })
        } else {
            None
        };

        Ok(ApplicationView {
            id: app.id.to_string(),
            email: app.email,
            phone: app.phone,
            website: app.website,
            startup_name: app.startup_name,
            team_size: app.team_size,
            sector: app.sector,
            description: app.description,
            problem: app.problem,
            differentiation: app.differentiation,
            milestones: app.milestones,
            has_customer_validation: yes_no(app.has_customer_validation),
            funding_secured: yes_no(app.funding_secured),
            active_customers: app.active_customers.to_string(),
            progress_percent: app.progress_percent.to_string(),
            investment_amount: app.investment_amount,
            investment_type: app.investment_type,
            valuation: app.valuation,
            support_requested,
            has_pitch_deck: yes_no(has_pitch_deck),
            pitch_deck,
            status: app.status,
            notes: app.notes,
            created_at: app.created_at.date_naive().format("%Y-%m-%d").to_string(),
        })
    }
}
