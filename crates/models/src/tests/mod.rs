use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;


/// Relationship and referential-action tests
pub mod relation_tests;

/// Fresh in-memory database with the full schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
