//! Admin Order Store
//!
//! Publishes [`OrderDeskState`] through a `tokio::sync::watch` channel.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::entity::order_desk_state::{OrderDeskState, OrderEvent};

#[derive(Debug, Clone)]
pub struct AdminOrderStore {
    state: Arc<watch::Sender<OrderDeskState>>,
}

impl Default for AdminOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminOrderStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(OrderDeskState::default());
        Self {
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> OrderDeskState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderDeskState> {
        self.state.subscribe()
    }

    pub fn dispatch(&self, event: &OrderEvent) {
        self.state.send_modify(|state| state.apply(event));
        tracing::debug!(event = event.name(), "Order desk state updated");
    }

    /// Forget the order shown in the details dialog
    pub fn reset_order_details(&self) {
        self.dispatch(&OrderEvent::ResetDetails);
    }
}
