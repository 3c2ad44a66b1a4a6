//! List Orders Use Case

use std::sync::Arc;

use auth::domain::phase::Phase;

use crate::application::store::AdminOrderStore;
use crate::domain::entity::order_desk_state::OrderEvent;
use crate::domain::gateway::OrderGateway;
use crate::domain::payload::OrderListPayload;

pub struct ListOrdersUseCase<G>
where
    G: OrderGateway,
{
    gateway: Arc<G>,
    store: AdminOrderStore,
}

impl<G> ListOrdersUseCase<G>
where
    G: OrderGateway,
{
    pub fn new(gateway: Arc<G>, store: AdminOrderStore) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self) -> Phase<OrderListPayload> {
        self.store.dispatch(&OrderEvent::List(Phase::Pending));

        let phase = Phase::from(self.gateway.list_orders().await);
        match &phase {
            Phase::Fulfilled(payload) => {
                tracing::info!(count = payload.data.data.len(), "Orders listed")
            }
            Phase::Rejected(rejection) => {
                tracing::warn!(kind = %rejection.kind(), "Order list rejected")
            }
            Phase::Pending => {}
        }

        self.store.dispatch(&OrderEvent::List(phase.clone()));
        phase
    }
}
