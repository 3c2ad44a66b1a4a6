//! Order Entity
//!
//! A customer order as the admin API returns it.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{amount::Amount, order_id::OrderId, order_status::OrderStatus};

/// One line of the order's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Amount,
    #[serde(default)]
    pub quantity: u32,
}

/// Shipping address captured at checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    #[serde(default)]
    pub address_info: AddressInfo,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub total_amount: Amount,
    /// ISO 8601 timestamp, kept as sent
    #[serde(default)]
    pub order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_update_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
}

impl Order {
    /// `2024-03-01T10:00:00.000Z` → `2024-03-01`
    pub fn order_day(&self) -> &str {
        self.order_date
            .split('T')
            .next()
            .unwrap_or(&self.order_date)
    }

    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|item| item.quantity).sum()
    }
}
