//! Operation Phases
//!
//! Every auth operation is observed as `Pending`, then exactly one of
//! `Fulfilled(payload)` or `Rejected(rejection)`.

use kernel::error::{
    app_error::{AppError, FALLBACK_MESSAGE},
    kind::ErrorKind,
};
use serde_json::Value;
use thiserror::Error;

/// Why an operation was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Server answered with a non-2xx status; its body is available
    #[error("Server rejected the request with status {status}")]
    Application { status: u16, body: Value },

    /// No response arrived
    #[error("No response from server: {0}")]
    Transport(String),

    /// 2xx response that could not be read
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
}

impl Rejection {
    /// Get the ErrorKind for this rejection
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rejection::Application { status, .. } => ErrorKind::from_status_code(*status),
            Rejection::Transport(_) => ErrorKind::Unreachable,
            Rejection::Malformed(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Payload sent by the server, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Rejection::Application { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `message` from the payload
    pub fn server_message(&self) -> Option<&str> {
        self.payload().and_then(kernel::envelope::message_of)
    }

    /// Text to show the user; transport failures have no payload, so they
    /// always get the fallback.
    pub fn user_message(&self) -> &str {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Rejection::Transport(_))
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            Rejection::Application { status, .. } => {
                AppError::from_status(*status, self.user_message().to_string())
            }
            Rejection::Transport(_) => AppError::unreachable(),
            Rejection::Malformed(detail) => AppError::malformed(FALLBACK_MESSAGE)
                .with_action(format!("Report this to an administrator ({detail})")),
        }
    }
}

/// Lifecycle of one asynchronous operation
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(Rejection),
}

impl<T> Phase<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Phase::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Phase::Rejected(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Phase::Fulfilled(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Phase::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Phase<U> {
        match self {
            Phase::Pending => Phase::Pending,
            Phase::Fulfilled(payload) => Phase::Fulfilled(f(payload)),
            Phase::Rejected(rejection) => Phase::Rejected(rejection),
        }
    }
}

impl<T> From<Result<T, Rejection>> for Phase<T> {
    fn from(result: Result<T, Rejection>) -> Self {
        match result {
            Ok(payload) => Phase::Fulfilled(payload),
            Err(rejection) => Phase::Rejected(rejection),
        }
    }
}
