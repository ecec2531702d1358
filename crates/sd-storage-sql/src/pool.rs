//! Database connection pool management.

use std::time::Duration;

use sd_storage::StorageError;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::from_sqlx_error;

/// Database pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections.
    pub max_connections: u32,
    /// Connection acquire timeout.
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/security".to_string(),
            max_connections: 4,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl PoolConfig {
    /// Creates a new pool configuration.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the maximum number of connections.
    #[must_use]
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection acquire timeout.
    #[must_use]
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Creates a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns `StorageError::Connection` if the pool cannot be created.
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, StorageError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// Verifies database connectivity with a trivial round trip.
///
/// # Errors
///
/// Returns the mapped storage error if the round trip fails.
pub async fn ping(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(from_sqlx_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_config_defaults() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn pool_config_builder() {
        let config = PoolConfig::new("postgres://localhost/test")
            .max_connections(8)
            .acquire_timeout(Duration::from_secs(5));

        assert_eq!(config.url, "postgres://localhost/test");
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }
}
