//! Orders (Admin Order Desk) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Order entity, desk state reducer, gateway trait
//! - `application/` - Use cases, the published store and the desk service
//! - `infra/` - HTTP gateway
//! - `presentation/` - Order-details dialog and status form bindings

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AdminOrderStore, OrderDesk, OrdersConfig};
pub use domain::{Order, OrderDeskState, OrderId, OrderStatus};
pub use error::{OrderError, OrderResult};
pub use infra::HttpOrderGateway;
