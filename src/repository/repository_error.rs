use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    AlreadyExists(String),
    ValidationError(String),
    /// The backing database is not configured (no DATABASE_URL). Maps to 503.
    NotConfigured(String),
    DatabaseError(String),
    ConnectionError(String),
    SerializationError(String),
    /// Generic error that wraps any error implementing std::error::Error
    Generic(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RepositoryError::AlreadyExists(msg) => write!(f, "Already Exists: {}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            RepositoryError::NotConfigured(msg) => write!(f, "Not Configured: {}", msg),
            RepositoryError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            RepositoryError::ConnectionError(msg) => write!(f, "Connection Error: {}", msg),
            RepositoryError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            RepositoryError::Generic(err) => write!(f, "Repository Error: {}", err),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Generic(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// Convenient constructors
impl RepositoryError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RepositoryError::NotFound(msg.into())
    }

    pub fn already_exists<T: Into<String>>(msg: T) -> Self {
        RepositoryError::AlreadyExists(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ValidationError(msg.into())
    }

    pub fn not_configured<T: Into<String>>(msg: T) -> Self {
        RepositoryError::NotConfigured(msg.into())
    }

    pub fn database<T: Into<String>>(msg: T) -> Self {
        RepositoryError::DatabaseError(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ConnectionError(msg.into())
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                RepositoryError::NotFound("Row not found".to_string())
            }
            sqlx::Error::Database(db_err) => {
                // 23505 is Postgres unique_violation
                if db_err.code().as_deref() == Some("23505") {
                    RepositoryError::AlreadyExists(format!("Duplicate key: {}", db_err))
                } else {
                    RepositoryError::DatabaseError(db_err.to_string())
                }
            }
            e @ (sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                RepositoryError::ConnectionError(e.to_string())
            }
            e @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)) => {
                RepositoryError::SerializationError(e.to_string())
            }
            e => RepositoryError::Generic(Box::new(e)),
        }
    }
}

// Result type alias for convenience
pub type RepositoryResult<T> = Result<T, RepositoryError>;
