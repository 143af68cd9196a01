//! Repository layer for database operations

pub mod books;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::{
    config::{DatabaseBackend, DatabaseConfig},
    error::AppResult,
};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: AnyPool,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Open a connection pool for the configured database and bring its schema up to date
pub async fn connect(config: &DatabaseConfig) -> AppResult<AnyPool> {
    let backend = config.backend()?;
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await?;

    match backend {
        DatabaseBackend::Sqlite => sqlx::migrate!("./migrations/sqlite").run(&pool).await?,
        DatabaseBackend::Postgres => sqlx::migrate!("./migrations/postgres").run(&pool).await?,
    }
    tracing::debug!(?backend, "Database schema is up to date");

    Ok(pool)
}
