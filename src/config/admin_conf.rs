use std::env;
use serde::{Deserialize, Serialize};
use crate::config::ConfigError;

/// Bootstrap credentials for the admin console. Only consulted on first
/// start, to seed the stored password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AdminConfig {
            password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?,
        })
    }
}
