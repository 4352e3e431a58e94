use std::error::Error;

use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Database names are interpolated into DDL, so only plain identifiers are accepted
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;
    let db_name = name.unwrap_or(config.name.clone());

    if !is_plain_identifier(&db_name) {
        error!("Refusing to create database with name '{}'", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);

    // Connect to the maintenance database; the target may not exist yet
    let server = Database::connect(format!("{}/postgres", config.server_url())).await?;

    let existing = server
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [db_name.clone().into()],
        ))
        .await?;

    if existing.is_some() {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    server
        .execute(Statement::from_string(
            DbBackend::Postgres,
            format!("CREATE DATABASE \"{}\"", db_name),
        ))
        .await
        .map_err(|e| {
            error!("Failed to create database: {}", e);
            e
        })?;

    info!("Database '{}' created successfully", db_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_identifiers_are_accepted() {
        assert!(is_plain_identifier("intake"));
        assert!(is_plain_identifier("intake_test_2"));
        assert!(!is_plain_identifier("2intake"));
        assert!(!is_plain_identifier("intake; DROP TABLE applications"));
        assert!(!is_plain_identifier(""));
    }
}
