// Database repository management

mod application_repository;

pub use application_repository::{ApplicationChanges, ApplicationRepository};

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
pub struct Repositories {
    pub application: ApplicationRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Repositories {
            application: ApplicationRepository::new(conn),
        }
    }
}
