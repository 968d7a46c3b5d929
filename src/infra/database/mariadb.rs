//! MariaDB executor implementation.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::domain::{AppError, DatabaseError, ExecResult, SqlExecutor, SqlParam};

/// MariaDB connection pool configuration.
#[derive(Debug, Clone)]
pub struct MariaDbConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for MariaDbConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(3),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// MariaDB executor with connection pooling.
///
/// Concrete implementation of the `SqlExecutor` port. Connections are
/// returned to the pool when dropped; the pool itself closes on drop.
pub struct MariaDbExecutor {
    pool: MySqlPool,
}

impl MariaDbExecutor {
    /// Creates a new executor with custom pool configuration.
    pub async fn new(config: &Config, pool_config: MariaDbConfig) -> Result<Self, AppError> {
        info!(host = %config.db_host, database = %config.db_name, "Connecting to MariaDB...");
        let options = Self::connect_options(config)?;
        let pool = MySqlPoolOptions::new()
            .max_connections(pool_config.max_connections)
            .min_connections(pool_config.min_connections)
            .acquire_timeout(pool_config.acquire_timeout)
            .idle_timeout(pool_config.idle_timeout)
            .max_lifetime(pool_config.max_lifetime)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(DatabaseError::Connection(e.to_string())))?;
        info!("Connected to MariaDB");
        Ok(Self { pool })
    }

    /// Creates a new executor with default pool configuration.
    pub async fn with_defaults(config: &Config) -> Result<Self, AppError> {
        Self::new(config, MariaDbConfig::default()).await
    }

    /// Builds driver connect options from the configuration.
    ///
    /// TLS material is plain configuration data applied here; when the
    /// certificate paths are absent the connection is made without client
    /// TLS.
    fn connect_options(config: &Config) -> Result<MySqlConnectOptions, AppError> {
        let url = config.database_url()?;
        let mut options = MySqlConnectOptions::from_str(url.as_str())
            .map_err(|e| AppError::Database(DatabaseError::Connection(e.to_string())))?;

        match &config.tls {
            Some(tls) => {
                options = options
                    .ssl_mode(MySqlSslMode::VerifyCa)
                    .ssl_ca(&tls.ca_cert)
                    .ssl_client_cert(&tls.client_cert)
                    .ssl_client_key(&tls.client_key);
            }
            None => debug!("Certificate variables not set, bypassing TLS setup"),
        }

        Ok(options)
    }

    /// Get the underlying connection pool (for testing).
    #[must_use]
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SqlExecutor for MariaDbExecutor {
    #[instrument(skip(self, params))]
    async fn execute(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<ExecResult, DatabaseError> {
        let mut statement = sqlx::query(query);
        for param in params {
            statement = match param {
                SqlParam::Text(value) => statement.bind(value),
                SqlParam::Double(value) => statement.bind(value),
            };
        }

        let result = statement
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(ExecResult {
            rows_affected: result.rows_affected(),
            // The driver reports 0 when the statement generated no key.
            last_insert_id: match result.last_insert_id() {
                0 => None,
                id => Some(id),
            },
        })
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_defaults() {
        let config = MariaDbConfig::default();

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }
}
