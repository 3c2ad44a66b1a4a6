//! Domain Layer
//!
//! Contains entities, value objects and the gateway trait.

pub mod entity;
pub mod gateway;
pub mod payload;
pub mod value_object;

// Re-exports
pub use entity::{
    order::{AddressInfo, CartItem, Order},
    order_desk_state::{OrderDeskState, OrderEvent},
};
pub use gateway::{LocalOrderGateway, OrderGateway};
pub use value_object::{
    order_id::OrderId,
    order_status::{BadgeTone, OrderStatus},
};
