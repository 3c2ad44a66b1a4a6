//! Operation Payloads
//!
//! Successful (2xx) bodies of the admin order endpoints.

use kernel::{Envelope, Extra};
use serde::{Deserialize, Serialize};

use crate::domain::entity::order::Order;

/// `GET /api/admin/orders/get`
pub type OrderListPayload = Envelope<OrderListData>;

/// `GET /api/admin/orders/details/{id}`
pub type OrderDetailsPayload = Envelope<OrderDetailsData>;

/// `PUT /api/admin/orders/update/{id}`
pub type UpdateStatusPayload = Envelope<Extra>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListData {
    #[serde(default)]
    pub data: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailsData {
    #[serde(default)]
    pub data: Option<Order>,
}
