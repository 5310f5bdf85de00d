#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use models::db::connect_with_config;

/// Fresh in-memory database per test with the full schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
