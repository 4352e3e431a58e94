//! SeaORM Entity for the applications table

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub phone: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub startup_name: String,
    #[sea_orm(column_type = "Text")]
    pub team_size: String,
    #[sea_orm(column_type = "Text")]
    pub sector: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub problem: String,
    #[sea_orm(column_type = "Text")]
    pub differentiation: String,
    #[sea_orm(column_type = "Text")]
    pub milestones: String,

    pub has_customer_validation: bool,
    pub funding_secured: bool,
    pub active_customers: i32,
    pub progress_percent: i32,

    // Free text as typed on the intake form, e.g. "1,200.50"
    #[sea_orm(column_type = "Text", nullable)]
    pub investment_amount: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub investment_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub valuation: Option<String>,

    /// JSON array of support category names
    pub support_requested: Json,

    #[serde(skip)]
    #[sea_orm(nullable)]
    pub pitch_deck: Option<Vec<u8>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pitch_deck_mime_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pitch_deck_filename: Option<String>,
    #[sea_orm(nullable)]
    pub pitch_deck_size: Option<i32>,

    pub status: ApplicationStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,
}

/// Application row as read by listing, lookup and analytics.
///
/// Selected without the `pitch_deck` payload; `has_pitch_deck` is computed
/// in the query as `pitch_deck IS NOT NULL`.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct ApplicationRecord {
    pub id: i32,
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
    pub has_customer_validation: bool,
    pub funding_secured: bool,
    pub active_customers: i32,
    pub progress_percent: i32,
    pub investment_amount: Option<String>,
    pub investment_type: Option<String>,
    pub valuation: Option<String>,
    pub support_requested: Json,
    pub has_pitch_deck: bool,
    pub pitch_deck_mime_type: Option<String>,
    pub pitch_deck_filename: Option<String>,
    pub pitch_deck_size: Option<i32>,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Review state of an application. Any state may move to any other.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parses a status token, ignoring surrounding whitespace and case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
