//! Entity Module

pub mod order;
pub mod order_desk_state;
