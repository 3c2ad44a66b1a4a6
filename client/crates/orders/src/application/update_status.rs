//! Update Order Status Use Case
//!
//! Changes an order's status on the server. The desk state is untouched;
//! callers refresh the list and details afterwards.

use std::sync::Arc;

use auth::domain::phase::Phase;

use crate::domain::gateway::OrderGateway;
use crate::domain::payload::UpdateStatusPayload;
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};

pub struct UpdateOrderStatusUseCase<G>
where
    G: OrderGateway,
{
    gateway: Arc<G>,
}

impl<G> UpdateOrderStatusUseCase<G>
where
    G: OrderGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &OrderId, status: &OrderStatus) -> Phase<UpdateStatusPayload> {
        let phase = Phase::from(self.gateway.update_status(id, status).await);
        match &phase {
            Phase::Fulfilled(payload) => tracing::info!(
                order_id = %id,
                status = %status,
                success = payload.success,
                "Order status update settled"
            ),
            Phase::Rejected(rejection) => tracing::warn!(
                order_id = %id,
                status = %status,
                kind = %rejection.kind(),
                "Order status update rejected"
            ),
            Phase::Pending => {}
        }
        phase
    }
}
