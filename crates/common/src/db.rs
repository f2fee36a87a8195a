//! Shared database setup for Curio
//!
//! The pool is created once at startup and handed to every domain's
//! repositories; it is dropped when the server shuts down.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Open the Postgres pool and, when configured, apply bundled migrations.
#[mutants::skip] // Exercised only against a live database
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required to connect to Postgres")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .context("Database connection failed")?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "Database connection established"
    );

    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    Ok(pool)
}

/// Apply the schema migrations shipped in `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
