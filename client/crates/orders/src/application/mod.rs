//! Application Layer
//!
//! Use cases and the order desk service.

pub mod config;
pub mod list_orders;
pub mod order_details;
pub mod service;
pub mod store;
pub mod update_status;

// Re-exports
pub use config::OrdersConfig;
pub use list_orders::ListOrdersUseCase;
pub use order_details::OrderDetailsUseCase;
pub use service::OrderDesk;
pub use store::AdminOrderStore;
pub use update_status::UpdateOrderStatusUseCase;
