//! Gateway Traits
//!
//! The admin order API. Implementation is in the infrastructure layer.

use auth::domain::phase::Rejection;

use crate::domain::payload::{OrderDetailsPayload, OrderListPayload, UpdateStatusPayload};
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};

/// Admin order gateway trait
#[trait_variant::make(OrderGateway: Send)]
pub trait LocalOrderGateway {
    /// `GET /api/admin/orders/get`
    async fn list_orders(&self) -> Result<OrderListPayload, Rejection>;

    /// `GET /api/admin/orders/details/{id}`
    async fn order_details(&self, id: &OrderId) -> Result<OrderDetailsPayload, Rejection>;

    /// `PUT /api/admin/orders/update/{id}`
    async fn update_status(
        &self,
        id: &OrderId,
        status: &OrderStatus,
    ) -> Result<UpdateStatusPayload, Rejection>;
}
