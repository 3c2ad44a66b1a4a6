//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Network failures are not errors here: they settle an operation as
//! [`Rejected`](crate::domain::phase::Phase::Rejected). `AuthError` covers
//! the local side (session storage, wiring).

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Session store could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Session Record holds something that is not a JSON string
    #[error("Stored session token is corrupt: {0}")]
    CorruptToken(#[source] serde_json::Error),

    /// HTTP client could not be set up
    #[error("HTTP client error: {0}")]
    Http(#[from] HttpError),

    /// Form input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Storage(_) | AuthError::CorruptToken(_) => ErrorKind::InternalServerError,
            AuthError::Http(e) => e.kind(),
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Storage(_) | AuthError::CorruptToken(_) => {
                AppError::internal("Could not access the saved session")
                    .with_action("Log in again")
            }
            AuthError::Http(e) => e.to_app_error(),
            AuthError::InvalidInput(msg) => AppError::bad_request(msg.clone()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::warn!(error = %e, "Session storage error");
            }
            AuthError::CorruptToken(e) => {
                tracing::warn!(error = %e, "Stored session token is corrupt");
            }
            AuthError::Http(e) => {
                tracing::error!(error = %e, "HTTP client error");
            }
            AuthError::InvalidInput(msg) => {
                tracing::debug!(message = %msg, "Invalid auth input");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error().with_source(err)
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::InvalidInput(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_storage_error_maps_to_internal() {
        let err = AuthError::from(StorageError::Io {
            path: PathBuf::from("/tmp/session.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.to_app_error().action(), Some("Log in again"));
    }

    #[test]
    fn test_invalid_input_from_app_error() {
        let err = AuthError::from(AppError::bad_request("Invalid email format"));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_app_error().message(), "Invalid email format");
    }
}
