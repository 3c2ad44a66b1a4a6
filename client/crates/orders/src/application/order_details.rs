//! Order Details Use Case

use std::sync::Arc;

use auth::domain::phase::Phase;

use crate::application::store::AdminOrderStore;
use crate::domain::entity::order_desk_state::OrderEvent;
use crate::domain::gateway::OrderGateway;
use crate::domain::payload::OrderDetailsPayload;
use crate::domain::value_object::order_id::OrderId;

pub struct OrderDetailsUseCase<G>
where
    G: OrderGateway,
{
    gateway: Arc<G>,
    store: AdminOrderStore,
}

impl<G> OrderDetailsUseCase<G>
where
    G: OrderGateway,
{
    pub fn new(gateway: Arc<G>, store: AdminOrderStore) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self, id: &OrderId) -> Phase<OrderDetailsPayload> {
        self.store.dispatch(&OrderEvent::Details(Phase::Pending));

        let phase = Phase::from(self.gateway.order_details(id).await);
        match &phase {
            Phase::Fulfilled(payload) => tracing::info!(
                order_id = %id,
                found = payload.data.data.is_some(),
                "Order details loaded"
            ),
            Phase::Rejected(rejection) => tracing::warn!(
                order_id = %id,
                kind = %rejection.kind(),
                "Order details rejected"
            ),
            Phase::Pending => {}
        }

        self.store.dispatch(&OrderEvent::Details(phase.clone()));
        phase
    }
}
