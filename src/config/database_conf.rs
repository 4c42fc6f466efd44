use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Postgres configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL. `None` means the backing database is not configured
    /// and every persistence call answers 503 instead of panicking at boot.
    pub url: Option<String>,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load Postgres configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABASE_URL: Postgres connection URL (optional; absent means unconfigured)
    /// - DATABASE_POOL_SIZE: Connection pool size (defaults to 10)
    /// - DATABASE_CONNECTION_TIMEOUT: Connection timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading database configuration from environment variables");

        let url = env::var("DATABASE_URL").ok();
        match &url {
            Some(_) => debug!("DATABASE_URL provided"),
            None => warn!("DATABASE_URL not set, persistence runs unconfigured"),
        }

        let pool_size = env::var("DATABASE_POOL_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid DATABASE_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid DATABASE_POOL_SIZE value".to_string())
            })?;
        debug!("Database pool size: {}", pool_size);

        let connection_timeout_secs = env::var("DATABASE_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid DATABASE_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid DATABASE_CONNECTION_TIMEOUT value".to_string())
            })?;
        debug!("Database connection timeout: {} seconds", connection_timeout_secs);

        let config = DatabaseConfig {
            url,
            pool_size,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("Database configuration loaded successfully");
        Ok(config)
    }

    /// Create DatabaseConfig for testing
    pub fn from_test_env() -> Self {
        DatabaseConfig {
            url: Some("postgres://localhost:5432/maresul_test".to_string()),
            pool_size: 2,
            connection_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.url {
            if url.is_empty() {
                error!("DATABASE_URL is empty");
                return Err(ConfigError::ValidationError(
                    "Database URL cannot be empty if set".to_string(),
                ));
            }
        }

        if self.pool_size == 0 {
            error!("Database pool size is 0");
            return Err(ConfigError::ValidationError(
                "Database pool size must be greater than 0".to_string(),
            ));
        }

        if self.connection_timeout_secs == 0 {
            error!("Database connection timeout is 0");
            return Err(ConfigError::ValidationError(
                "Database connection timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.connection_timeout_secs, 5);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = DatabaseConfig::from_test_env();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unconfigured_is_ok() {
        let config = DatabaseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        let mut config = DatabaseConfig::from_test_env();
        config.url = Some("".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_pool_size() {
        let mut config = DatabaseConfig::from_test_env();
        config.pool_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = DatabaseConfig::from_test_env();
        config.connection_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
