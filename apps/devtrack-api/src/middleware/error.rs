//! Error handling - maps domain failures to `{ message }` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use devtrack_core::ports::AuthError;
use devtrack_core::{DomainError, RepoError};
use devtrack_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    /// Wrong HTTP verb; carries the verbs the resource does accept.
    MethodNotAllowed(&'static str),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => write!(f, "{}", msg),
            AppError::MethodNotAllowed(_) => write!(f, "Method not allowed"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::MethodNotAllowed(allow) => {
                builder.insert_header((header::ALLOW, *allow));
                return builder.json(ErrorResponse::method_not_allowed());
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
            }
            _ => {}
        }

        builder.json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Forbidden => AppError::Forbidden(err.to_string()),
            DomainError::Repo(repo) => repo.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Insert(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
