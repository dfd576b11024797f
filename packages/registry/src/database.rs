use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::schema;

/// Connect and bring the schema up to date.
///
/// Every entity under `pet_registry::entity` is synced from the entity
/// registry, then the constraints the entity macros cannot express are
/// added by [`schema::ensure_indexes`]. Both steps are idempotent.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    sync_schema(&db).await?;

    Ok(db)
}

/// Sync the entity registry and ensure the extra indexes exist.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.get_schema_registry("pet_registry::entity::*")
        .sync(db)
        .await?;
    schema::ensure_indexes(db).await?;

    info!(backend = ?db.get_database_backend(), "Schema synchronized");
    Ok(())
}
