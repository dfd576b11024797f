use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pet_registry::config::AppConfig;
use pet_registry::database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Syncing schema");
    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;

    db.close().await.context("Failed to close database")?;
    info!("Schema is up to date");

    Ok(())
}
