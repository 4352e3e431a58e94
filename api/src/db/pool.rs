// Database connection pooling management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::db::error::DbError;
use crate::db::repositories::Repositories;

/// Database connection pool for managing Sea-ORM connections.
///
/// Created once by the entry point and shared by every request through
/// the repositories it hands out.
pub struct DbPool {
    pool: Arc<DatabaseConnection>,
}

impl DbPool {
    /// Creates a new database connection pool from API configuration
    pub async fn new(config: &ApiConfig) -> Result<Self, DbError> {
        let acquire_timeout_secs: u64 = 8;
        let idle_timeout_secs: u64 = 300;
        let connect_timeout_secs: u64 = 10;
        let debug_mode = false;

        let conn_opts = ConnectOptions::new(config.database_url.clone())
            .max_connections(config.db_pool_max)
            .min_connections(config.db_pool_min)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .sqlx_logging(debug_mode)
            .to_owned();

        Database::connect(conn_opts)
            .await
            .map(|pool| DbPool {
                pool: Arc::new(pool),
            })
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Creates repository instances for database operations
    pub fn repositories(&self) -> Repositories {
        Repositories::new(Arc::clone(&self.pool))
    }

    /// Closes every pooled connection once no repository holds the handle
    pub async fn close(self) -> Result<(), DbError> {
        match Arc::try_unwrap(self.pool) {
            Ok(pool) => pool.close().await.map_err(Into::into),
            Err(_) => {
                tracing::warn!("Database handle still in use, connections close on drop");
                Ok(())
            }
        }
    }
}
