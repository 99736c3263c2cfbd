//! Error handling - maps application failures to structured responses.
//!
//! Every error serializes to a `{"detail": ...}` body; rejected ID tokens
//! additionally carry the verifier's diagnostic in an `error` field.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use socialite_shared::ErrorResponse;

/// Application-level error type for the HTTP surface.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    /// Federated token rejected; the payload is the verification diagnostic.
    InvalidIdToken(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::InvalidIdToken(msg) => write!(f, "Invalid ID token: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidIdToken(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::BadRequest(detail) => ErrorResponse::new(detail.clone()),
            AppError::Unauthorized(detail) => ErrorResponse::new(detail.clone()),
            AppError::InvalidIdToken(diagnostic) => {
                ErrorResponse::new("Invalid Google ID token.").with_error(diagnostic.clone())
            }
            AppError::Conflict(detail) => ErrorResponse::new(detail.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<socialite_core::error::RepoError> for AppError {
    fn from(err: socialite_core::error::RepoError) -> Self {
        match err {
            socialite_core::error::RepoError::NotFound => AppError::NotFound,
            socialite_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            socialite_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            socialite_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed JSON bodies become a 400 with the parser's message as detail.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("JSON parse error - {err}")).into())
}

/// Path parameters that fail to parse (non-UUID post ids) become a 404,
/// matching lookup-by-unknown-id behavior.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into())
}
