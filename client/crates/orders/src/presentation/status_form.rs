//! Order Status Form
//!
//! The select + submit button at the bottom of the order-details dialog.

use std::sync::Arc;

use auth::domain::phase::Phase;
use platform::ui::{Notifier, Toast};

use crate::application::service::OrderDesk;
use crate::domain::gateway::OrderGateway;
use crate::domain::payload::UpdateStatusPayload;
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};

pub struct OrderStatusForm<G>
where
    G: OrderGateway,
{
    desk: Arc<OrderDesk<G>>,
    notifier: Arc<dyn Notifier>,
    order_id: OrderId,
}

impl<G> OrderStatusForm<G>
where
    G: OrderGateway,
{
    pub fn new(desk: Arc<OrderDesk<G>>, notifier: Arc<dyn Notifier>, order_id: OrderId) -> Self {
        Self {
            desk,
            notifier,
            order_id,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Update the status. On success the list and the open order are
    /// reloaded and the server message is shown.
    pub async fn submit(&self, status: &OrderStatus) -> Phase<UpdateStatusPayload> {
        let phase = self.desk.update_status(&self.order_id, status).await;

        if let Some(payload) = phase.payload().filter(|p| p.success) {
            self.desk.list_orders().await;
            self.desk.order_details(&self.order_id).await;
            if let Some(message) = payload.message.as_deref() {
                self.notifier.notify(Toast::info(message));
            }
        }
        phase
    }
}
