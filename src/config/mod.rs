pub mod app_conf;
pub mod database_conf;
pub mod email_conf;
pub mod upload_conf;
pub mod sync_conf;
pub mod admin_conf;

pub use database_conf::DatabaseConfig;
pub use email_conf::EmailConfig;
pub use upload_conf::UploadConfig;
pub use sync_conf::SyncConfig;
pub use admin_conf::AdminConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
