use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Opens the pool backing quiz questions and attempt history.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!(
        "Connecting to PostgreSQL (max {} connections)...",
        config.database_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
