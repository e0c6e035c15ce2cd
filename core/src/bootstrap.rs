//! Startup connection bootstrap
//!
//! Opens the pool, verifies connectivity and prepares the users table.
//! Failures come back as [`StartupError`] so the caller can stop before the
//! listener is bound.

use sqlx::postgres::PgPool;
use sqlx::Connection;
use thiserror::Error;
use tracing::info;

use crate::schema::{ensure_users_table, SchemaMode};

/// Fatal errors raised before the service accepts connections
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database connection check failed: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("Failed to prepare table 'users': {0}")]
    Schema(#[source] sqlx::Error),
}

/// Connect, ping and ensure the users table exists
pub async fn bootstrap(database_url: &str, mode: SchemaMode) -> Result<PgPool, StartupError> {
    let pool = PgPool::connect(database_url)
        .await
        .map_err(StartupError::Connect)?;

    let mut conn = pool.acquire().await.map_err(StartupError::Ping)?;
    conn.ping().await.map_err(StartupError::Ping)?;
    drop(conn);
    info!("Database connection established");

    ensure_users_table(&pool, mode)
        .await
        .map_err(StartupError::Schema)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_error_display() {
        let err = StartupError::Connect(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Failed to connect to database"));

        let err = StartupError::Schema(sqlx::Error::PoolClosed);
        assert!(err.to_string().contains("'users'"));
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_malformed_url() {
        let err = bootstrap("not-a-database-url", SchemaMode::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StartupError::Connect(_)));
    }
}
