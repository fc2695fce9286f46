
/// Foreign keys and the soft-delete flag
pub mod constraint_tests;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::{connect_migrated, DatabaseConfig};

/// Fresh SQLite file per test, migrated with the real migrator.
pub(crate) async fn test_db() -> anyhow::Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("agef-models-{}.db", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    connect_migrated(&cfg).await
}
