use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Image CDN upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// CDN upload endpoint, e.g. "https://cdn.example.com/v1/upload".
    /// `None` means uploads are unconfigured and answer 503.
    pub endpoint: Option<String>,
    /// API key sent as a bearer token
    pub api_key: Option<String>,
    /// Maximum accepted file size in bytes
    pub max_file_bytes: usize,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
}

pub const DEFAULT_MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

impl UploadConfig {
    /// Load CDN configuration from environment variables
    ///
    /// Expected environment variables:
    /// - CDN_UPLOAD_URL: upload endpoint (optional; absent means unconfigured)
    /// - CDN_API_KEY: bearer token (optional)
    /// - CDN_MAX_FILE_BYTES: size cap (defaults to 5 MiB)
    /// - CDN_REQUEST_TIMEOUT: upstream timeout in seconds (defaults to 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading upload configuration from environment variables");

        let endpoint = env::var("CDN_UPLOAD_URL").ok();
        match &endpoint {
            Some(url) => debug!("CDN upload endpoint: {}", url),
            None => warn!("CDN_UPLOAD_URL not set, image uploads run unconfigured"),
        }

        let api_key = env::var("CDN_API_KEY").ok();

        let max_file_bytes = env::var("CDN_MAX_FILE_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_BYTES.to_string())
            .parse::<usize>()
            .map_err(|_| {
                error!("Invalid CDN_MAX_FILE_BYTES value");
                ConfigError::InvalidValue("Invalid CDN_MAX_FILE_BYTES value".to_string())
            })?;

        let request_timeout_secs = env::var("CDN_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid CDN_REQUEST_TIMEOUT value");
                ConfigError::InvalidValue("Invalid CDN_REQUEST_TIMEOUT value".to_string())
            })?;

        let config = UploadConfig {
            endpoint,
            api_key,
            max_file_bytes,
            request_timeout_secs,
        };

        config.validate()?;
        info!("Upload configuration loaded successfully");
        Ok(config)
    }

    pub fn from_test_env() -> Self {
        UploadConfig {
            endpoint: Some("http://localhost:9999/upload".to_string()),
            api_key: Some("test-key".to_string()),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            request_timeout_secs: 2,
        }
    }

    /// An unconfigured instance, as seen during builds without CDN credentials.
    pub fn unconfigured() -> Self {
        UploadConfig {
            endpoint: None,
            api_key: None,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            request_timeout_secs: 30,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref endpoint) = self.endpoint {
            if endpoint.is_empty() {
                error!("CDN endpoint is empty");
                return Err(ConfigError::ValidationError(
                    "CDN endpoint cannot be empty if set".to_string(),
                ));
            }
        }

        if self.max_file_bytes == 0 {
            error!("Max file size is 0");
            return Err(ConfigError::ValidationError(
                "Max file size must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            error!("Request timeout is 0");
            return Err(ConfigError::ValidationError(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config_is_valid() {
        let config = UploadConfig::from_test_env();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unconfigured_is_valid() {
        let config = UploadConfig::unconfigured();
        assert!(config.validate().is_ok());
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let mut config = UploadConfig::from_test_env();
        config.endpoint = Some("".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_max_bytes() {
        let mut config = UploadConfig::from_test_env();
        config.max_file_bytes = 0;
        assert!(config.validate().is_err());
    }
}
