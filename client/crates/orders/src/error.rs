//! Orders Error Types
//!
//! Local failures of the order desk. Failed API calls settle as
//! `Phase::Rejected` instead.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use thiserror::Error;

/// Orders-specific result type alias
pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error)]
pub enum OrderError {
    /// HTTP client could not be set up
    #[error("HTTP client error: {0}")]
    Http(#[from] HttpError),

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl OrderError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Http(e) => e.kind(),
            OrderError::InvalidInput(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            OrderError::Http(e) => e.to_app_error(),
            OrderError::InvalidInput(msg) => AppError::bad_request(msg.clone()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            OrderError::Http(e) => tracing::error!(error = %e, "Orders HTTP client error"),
            OrderError::InvalidInput(msg) => tracing::debug!(message = %msg, "Invalid order input"),
        }
    }
}

impl From<AppError> for OrderError {
    fn from(err: AppError) -> Self {
        OrderError::InvalidInput(err.message().to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        err.log();
        err.to_app_error().with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input() {
        let err = OrderError::from(AppError::bad_request("Order ID cannot be empty"));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_app_error().message(), "Order ID cannot be empty");
    }
}
