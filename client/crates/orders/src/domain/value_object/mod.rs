//! Value Object Module

pub mod amount;
pub mod order_id;
pub mod order_status;
