//! Order Desk State Entity
//!
//! What the admin orders page shows: the list, and the order open in the
//! details dialog.

use auth::domain::phase::Phase;

use crate::domain::entity::order::Order;
use crate::domain::payload::{OrderDetailsPayload, OrderListPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDeskState {
    pub is_loading: bool,
    pub order_list: Vec<Order>,
    pub order_details: Option<Order>,
}

/// Something that changes [`OrderDeskState`]
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    List(Phase<OrderListPayload>),
    Details(Phase<OrderDetailsPayload>),
    /// Dialog closed
    ResetDetails,
}

impl OrderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::List(_) => "list",
            OrderEvent::Details(_) => "details",
            OrderEvent::ResetDetails => "reset_details",
        }
    }
}

impl OrderDeskState {
    pub fn apply(&mut self, event: &OrderEvent) {
        match event {
            OrderEvent::List(Phase::Pending) | OrderEvent::Details(Phase::Pending) => {
                self.is_loading = true;
            }
            OrderEvent::List(Phase::Fulfilled(payload)) => {
                self.is_loading = false;
                self.order_list = payload.data.data.clone();
            }
            OrderEvent::List(Phase::Rejected(_)) => {
                self.is_loading = false;
                self.order_list.clear();
            }
            OrderEvent::Details(Phase::Fulfilled(payload)) => {
                self.is_loading = false;
                self.order_details = payload.data.data.clone();
            }
            OrderEvent::Details(Phase::Rejected(_)) => {
                self.is_loading = false;
                self.order_details = None;
            }
            OrderEvent::ResetDetails => self.order_details = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::{OrderDetailsData, OrderListData};
    use auth::domain::phase::Rejection;
    use kernel::Envelope;
    use serde_json::json;

    fn order(id: &str) -> Order {
        serde_json::from_value(json!({"_id": id, "orderDate": "2024-03-01T10:00:00Z"})).unwrap()
    }

    #[test]
    fn test_list_lifecycle() {
        let mut state = OrderDeskState::default();
        state.apply(&OrderEvent::List(Phase::Pending));
        assert!(state.is_loading);

        let payload = Envelope::new(
            true,
            None,
            OrderListData {
                data: vec![order("a"), order("b")],
            },
        );
        state.apply(&OrderEvent::List(Phase::Fulfilled(payload)));
        assert!(!state.is_loading);
        assert_eq!(state.order_list.len(), 2);

        state.apply(&OrderEvent::List(Phase::Rejected(Rejection::Transport(
            "down".into(),
        ))));
        assert!(state.order_list.is_empty());
    }

    #[test]
    fn test_details_lifecycle() {
        let mut state = OrderDeskState::default();
        let payload = Envelope::new(
            true,
            None,
            OrderDetailsData {
                data: Some(order("a")),
            },
        );
        state.apply(&OrderEvent::Details(Phase::Fulfilled(payload)));
        assert_eq!(
            state.order_details.as_ref().map(|o| o.id.as_str()),
            Some("a")
        );

        state.apply(&OrderEvent::ResetDetails);
        assert!(state.order_details.is_none());
        assert!(!state.is_loading);
    }
}
