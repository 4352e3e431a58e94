// Application database operations implementation

use std::sync::Arc;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Iterable, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::db::error::DbError;
use crate::entity::applications::{self, ApplicationRecord, ApplicationStatus};

/// Columns an admin may change on an existing application.
///
/// `None` leaves the column untouched. For `notes`, `Some(None)` clears the note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationChanges {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<Option<String>>,
}

impl ApplicationChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}

/// Every column except the pitch deck payload, plus its presence flag
fn select_records() -> Select<applications::Entity> {
    applications::Entity::find()
        .select_only()
        .columns(
            applications::Column::iter()
                .filter(|column| !matches!(column, applications::Column::PitchDeck)),
        )
        .column_as(
            Expr::col((applications::Entity, applications::Column::PitchDeck)).is_not_null(),
            "has_pitch_deck",
        )
}

/// Repository for application database operations
pub struct ApplicationRepository {
    conn: Arc<DatabaseConnection>,
}

impl ApplicationRepository {
    /// Creates a new application repository with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        ApplicationRepository { conn }
    }

    /// Checks that the store is reachable
    pub async fn ping(&self) -> Result<(), DbError> {
        self.conn.ping().await.map_err(Into::into)
    }

    /// Retrieves every application ordered by id
    pub async fn find_all(&self) -> Result<Vec<ApplicationRecord>, DbError> {
        select_records()
            .order_by_asc(applications::Column::Id)
            .into_model::<ApplicationRecord>()
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Retrieves a single application by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ApplicationRecord>, DbError> {
        select_records()
            .filter(applications::Column::Id.eq(id))
            .into_model::<ApplicationRecord>()
            .one(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Applies a partial update to one application and returns the stored row.
    ///
    /// An update that touches no row, including one whose row was removed
    /// concurrently, is `RecordNotFound`.
    pub async fn update(
        &self,
        id: i32,
        changes: ApplicationChanges,
    ) -> Result<ApplicationRecord, DbError> {
        if changes.is_empty() {
            return self.find_by_id(id).await?.ok_or(DbError::RecordNotFound(id));
        }

        let mut application = applications::ActiveModel::default();
        if let Some(status) = changes.status {
            application.status = Set(status);
        }
        if let Some(notes) = changes.notes {
            application.notes = Set(notes);
        }

        let result = applications::Entity::update_many()
            .set(application)
            .filter(applications::Column::Id.eq(id))
            .exec(self.conn.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::RecordNotFound(id));
        }

        self.find_by_id(id).await?.ok_or(DbError::RecordNotFound(id))
    }
}
