//! Order Desk Service
//!
//! The admin orders page's handle on the API and its state.

use std::sync::Arc;

use auth::domain::phase::Phase;

use crate::application::{
    list_orders::ListOrdersUseCase, order_details::OrderDetailsUseCase, store::AdminOrderStore,
    update_status::UpdateOrderStatusUseCase,
};
use crate::domain::entity::order_desk_state::OrderDeskState;
use crate::domain::gateway::OrderGateway;
use crate::domain::payload::{OrderDetailsPayload, OrderListPayload, UpdateStatusPayload};
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};

pub struct OrderDesk<G>
where
    G: OrderGateway,
{
    store: AdminOrderStore,
    list: ListOrdersUseCase<G>,
    details: OrderDetailsUseCase<G>,
    update_status: UpdateOrderStatusUseCase<G>,
}

impl<G> OrderDesk<G>
where
    G: OrderGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        let store = AdminOrderStore::new();
        Self {
            list: ListOrdersUseCase::new(gateway.clone(), store.clone()),
            details: OrderDetailsUseCase::new(gateway.clone(), store.clone()),
            update_status: UpdateOrderStatusUseCase::new(gateway),
            store,
        }
    }

    pub fn store(&self) -> &AdminOrderStore {
        &self.store
    }

    pub fn state(&self) -> OrderDeskState {
        self.store.snapshot()
    }

    pub async fn list_orders(&self) -> Phase<OrderListPayload> {
        self.list.execute().await
    }

    pub async fn order_details(&self, id: &OrderId) -> Phase<OrderDetailsPayload> {
        self.details.execute(id).await
    }

    pub async fn update_status(
        &self,
        id: &OrderId,
        status: &OrderStatus,
    ) -> Phase<UpdateStatusPayload> {
        self.update_status.execute(id, status).await
    }

    pub fn reset_order_details(&self) {
        self.store.reset_order_details();
    }
}
