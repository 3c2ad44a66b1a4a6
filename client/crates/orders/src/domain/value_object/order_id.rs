//! Order ID Value Object
//!
//! The server's `_id` for an order. Opaque to the client.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Order ID
///
/// IDs read from the API go through [`OrderId::new`] as well, since they
/// end up in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Blank IDs are rejected; they would address the collection instead
    /// of an order.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(AppError::bad_request("Order ID cannot be empty"));
        }
        if raw.contains('/') {
            return Err(AppError::bad_request("Order ID cannot contain '/'"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrderId {
    type Error = AppError;

    fn try_from(raw: String) -> AppResult<Self> {
        OrderId::new(raw)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
