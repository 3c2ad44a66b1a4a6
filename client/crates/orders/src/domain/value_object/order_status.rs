//! Order Status Value Object
//!
//! Where an order is in fulfilment. Unknown codes from the server are kept
//! as [`OrderStatus::Other`] instead of failing the whole list.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("inProcess")]
    InProcess,
    #[display("inShipping")]
    InShipping,
    #[display("delivered")]
    Delivered,
    #[display("rejected")]
    Rejected,
    /// Set by the payment flow, not selectable by admins
    #[display("confirmed")]
    Confirmed,
    #[serde(untagged)]
    #[display("{_0}")]
    Other(String),
}

/// Colour of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// green
    Success,
    /// red
    Danger,
    /// black
    Neutral,
}

impl OrderStatus {
    /// Statuses an admin can pick in the status form, in display order
    pub const SELECTABLE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::InProcess,
        OrderStatus::InShipping,
        OrderStatus::Delivered,
        OrderStatus::Rejected,
    ];

    /// Parse a wire code
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => OrderStatus::Pending,
            "inProcess" => OrderStatus::InProcess,
            "inShipping" => OrderStatus::InShipping,
            "delivered" => OrderStatus::Delivered,
            "rejected" => OrderStatus::Rejected,
            "confirmed" => OrderStatus::Confirmed,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Parse a code an admin may select
    pub fn selectable(code: &str) -> AppResult<Self> {
        let status = Self::from_code(code.trim());
        if status.is_selectable() {
            Ok(status)
        } else {
            Err(AppError::bad_request(format!("Unknown order status: {code}"))
                .with_action("Use one of: pending, inProcess, inShipping, delivered, rejected"))
        }
    }

    pub fn is_selectable(&self) -> bool {
        Self::SELECTABLE.contains(self)
    }

    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProcess => "In Process",
            OrderStatus::InShipping => "In Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Other(code) => code,
        }
    }

    pub fn badge_tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Confirmed | OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Rejected => BadgeTone::Danger,
            _ => BadgeTone::Neutral,
        }
    }
}
