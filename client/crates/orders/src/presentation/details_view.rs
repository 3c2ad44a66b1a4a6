//! Order Details View
//!
//! Everything the order-details dialog shows, already formatted.

use auth::domain::entity::auth_state::AuthState;

use crate::domain::entity::order::Order;
use crate::domain::value_object::order_status::{BadgeTone, OrderStatus};

/// `label: value` line in the summary block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Order status badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: String,
    pub tone: BadgeTone,
}

/// One cart line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub title: String,
    pub quantity: u32,
    /// `$x`
    pub price: String,
}

/// Entry of the status select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsView {
    /// Order ID, Order Date, Order Price, Payment Method, Payment Status
    pub rows: Vec<DetailRow>,
    /// Order Status
    pub status: StatusBadge,
    pub items: Vec<CartLine>,
    /// Admin's user name followed by the address fields
    pub shipping: Vec<String>,
    pub status_options: Vec<StatusOption>,
}

impl OrderDetailsView {
    pub fn new(order: &Order, auth: &AuthState) -> Self {
        let rows = vec![
            DetailRow {
                label: "Order ID",
                value: order.id.to_string(),
            },
            DetailRow {
                label: "Order Date",
                value: order.order_day().to_string(),
            },
            DetailRow {
                label: "Order Price",
                value: format!("${}", order.total_amount),
            },
            DetailRow {
                label: "Payment Method",
                value: order.payment_method.clone(),
            },
            DetailRow {
                label: "Payment Status",
                value: order.payment_status.clone(),
            },
        ];

        let items = order
            .cart_items
            .iter()
            .map(|item| CartLine {
                title: item.title.clone(),
                quantity: item.quantity,
                price: format!("${}", item.price),
            })
            .collect();

        let address = &order.address_info;
        let shipping = vec![
            auth.user_name().unwrap_or_default().to_string(),
            address.address.clone(),
            address.city.clone(),
            address.pincode.clone(),
            address.phone.clone(),
            address.notes.clone(),
        ];

        Self {
            rows,
            status: StatusBadge {
                text: order.order_status.to_string(),
                tone: order.order_status.badge_tone(),
            },
            items,
            shipping,
            status_options: status_options(),
        }
    }

    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Options of the "Order Status" select
pub fn status_options() -> Vec<StatusOption> {
    OrderStatus::SELECTABLE
        .iter()
        .map(|status| StatusOption {
            id: status.to_string(),
            label: status.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::domain::entity::user::User;
    use serde_json::json;

    fn order() -> Order {
        serde_json::from_value(json!({
            "_id": "65f0c1",
            "cartItems": [{"productId": "p1", "title": "Sneakers", "price": 45, "quantity": 2}],
            "addressInfo": {"address": "1 Main St", "city": "Springfield", "pincode": "12345", "phone": "555-0100", "notes": ""},
            "orderStatus": "rejected",
            "paymentMethod": "paypal",
            "paymentStatus": "paid",
            "totalAmount": 90,
            "orderDate": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap()
    }

    fn admin() -> AuthState {
        AuthState {
            is_authenticated: true,
            is_loading: false,
            user: Some(User::new("shop-admin")),
            token: None,
        }
    }

    #[test]
    fn test_summary_rows() {
        let view = OrderDetailsView::new(&order(), &admin());
        assert_eq!(view.row("Order ID"), Some("65f0c1"));
        assert_eq!(view.row("Order Date"), Some("2024-03-01"));
        assert_eq!(view.row("Order Price"), Some("$90"));
        assert_eq!(view.row("Payment Method"), Some("paypal"));
        assert_eq!(view.row("Payment Status"), Some("paid"));
        assert_eq!(
            view.status,
            StatusBadge {
                text: "rejected".into(),
                tone: BadgeTone::Danger
            }
        );
    }

    #[test]
    fn test_items_and_shipping() {
        let view = OrderDetailsView::new(&order(), &admin());
        assert_eq!(
            view.items,
            vec![CartLine {
                title: "Sneakers".into(),
                quantity: 2,
                price: "$45".into()
            }]
        );
        assert_eq!(view.shipping[0], "shop-admin");
        assert_eq!(view.shipping[2], "Springfield");
    }

    #[test]
    fn test_status_options() {
        let ids: Vec<_> = status_options().into_iter().map(|o| o.id).collect();
        assert_eq!(
            ids,
            ["pending", "inProcess", "inShipping", "delivered", "rejected"]
        );
        assert_eq!(status_options()[1].label, "In Process");
    }

    #[test]
    fn test_signed_out_shipping_name_is_blank() {
        let view = OrderDetailsView::new(&order(), &AuthState::default());
        assert_eq!(view.shipping[0], "");
    }
}
