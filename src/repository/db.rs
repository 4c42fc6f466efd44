use crate::config::DatabaseConfig;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

/// Shared handle over an optional connection pool. When DATABASE_URL is
/// absent every repository call answers `NotConfigured` (503) instead of the
/// process failing to boot, which is what happens to the portal during
/// builds without database credentials.
#[derive(Clone)]
pub struct Database {
    pool: Option<PgPool>,
}

impl Database {
    pub fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        match &config.url {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.pool_size)
                    .acquire_timeout(std::time::Duration::from_secs(
                        config.connection_timeout_secs,
                    ))
                    .connect_lazy(url)?;
                info!("Database pool created (size {})", config.pool_size);
                Ok(Database { pool: Some(pool) })
            }
            None => {
                warn!("Database not configured, persistence calls will answer 503");
                Ok(Database { pool: None })
            }
        }
    }

    pub fn unconfigured() -> Self {
        Database { pool: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> RepositoryResult<&PgPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| RepositoryError::not_configured("Database is not configured"))
    }
}
