use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    BadRequest,
    Unauthorized,
    Forbidden,
    Conflict,
    RateLimited,
    Unavailable,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Unauthorized => "Unauthorized",
            HandlerErrorKind::Forbidden => "Forbidden",
            HandlerErrorKind::Conflict => "Conflict",
            HandlerErrorKind::RateLimited => "RateLimited",
            HandlerErrorKind::Unavailable => "Unavailable",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Handler-boundary error. Renders as the `{ "success": false, "error": … }`
/// envelope with the status implied by the kind.
#[derive(Debug)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn not_found<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl Serialize for HandlerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HandlerError", 2)?;
        state.serialize_field("success", &false)?;
        state.serialize_field("error", &self.message)?;
        state.end()
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerErrorKind::Forbidden => StatusCode::FORBIDDEN,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
            HandlerErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            HandlerErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    InvalidInput(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    RateLimited(String),
    Unavailable(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::RateLimited(msg) => write!(f, "Rate Limited: {}", msg),
            ServiceError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Conflict(msg),
            RepositoryError::NotConfigured(msg) => ServiceError::Unavailable(msg),
            RepositoryError::DatabaseError(msg) => ServiceError::InternalError(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::InternalError(msg),
            RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
            RepositoryError::Generic(e) => ServiceError::InternalError(e.to_string()),
        }
    }
}

// The error message is surfaced to the client verbatim, matching the
// envelope contract in the external interface table.
impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        let (kind, message) = match err {
            ServiceError::NotFound(msg) => (HandlerErrorKind::NotFound, msg),
            ServiceError::InvalidInput(msg) => (HandlerErrorKind::Validation, msg),
            ServiceError::Unauthorized(msg) => (HandlerErrorKind::Unauthorized, msg),
            ServiceError::Forbidden(msg) => (HandlerErrorKind::Forbidden, msg),
            ServiceError::Conflict(msg) => (HandlerErrorKind::Conflict, msg),
            ServiceError::RateLimited(msg) => (HandlerErrorKind::RateLimited, msg),
            ServiceError::Unavailable(msg) => (HandlerErrorKind::Unavailable, msg),
            ServiceError::InternalError(msg) => (HandlerErrorKind::Internal, msg),
        };
        HandlerError { error: kind, message }
    }
}
