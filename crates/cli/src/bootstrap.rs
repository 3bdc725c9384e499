use anyhow::Context;
use classwatch_domain::config::{CliOverrides, Config};
use classwatch_infrastructure::{create_pool, init_schema, SchemaMode};
use sqlx::SqlitePool;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).context("Failed to load configuration")
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn init_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite:{}", config.database.path);
    let pool = create_pool(&database_url, config.database.max_connections)
        .await
        .context("Failed to open database")?;

    let mode = if config.database.reset_on_start {
        warn!(path = %config.database.path, "Reset requested; all existing data will be dropped");
        SchemaMode::DropAndRecreate
    } else {
        SchemaMode::CreateIfAbsent
    };

    init_schema(&pool, mode)
        .await
        .context("Failed to initialize database schema")?;

    Ok(pool)
}
