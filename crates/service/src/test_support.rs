#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_migrated, DatabaseConfig};
use uuid::Uuid;

/// Migrated SQLite database in a throwaway file, one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("agef-service-{}.db", Uuid::new_v4()));
    let mut cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    cfg.min_connections = 1;
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    connect_migrated(&cfg).await
}
