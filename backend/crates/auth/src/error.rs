//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field is absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A request field failed validation
    #[error("{reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// No token cookie on the request
    #[error("Authentication token missing")]
    TokenMissing,

    /// Malformed token or bad signature
    #[error("Invalid authentication token")]
    TokenInvalid,

    /// Token past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Token issued too long ago to be refreshed
    #[error("Token is too old to be refreshed, please log in again")]
    TokenStale,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingField(_) | AuthError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::TokenStale => StatusCode::UNAUTHORIZED,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField(_) | AuthError::InvalidField { .. } => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::TokenStale => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Field-level errors carry the offending field name so the response
    /// body renders as `{field, error}`; token errors render `{message}`.
    /// Server errors never leak their cause to the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::MissingField(field) => {
                AppError::new(self.kind(), self.to_string()).with_field(*field)
            }
            AuthError::InvalidField { field, .. } => {
                AppError::new(self.kind(), self.to_string()).with_field(*field)
            }
            // Same field, status and message whether the email is unknown
            // or the password is wrong.
            AuthError::InvalidCredentials => {
                AppError::new(self.kind(), self.to_string()).with_field("credentials")
            }
            AuthError::EmailTaken => {
                AppError::new(self.kind(), self.to_string()).with_field("email")
            }
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenStale => {
                tracing::warn!("Refresh attempt with a stale token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
