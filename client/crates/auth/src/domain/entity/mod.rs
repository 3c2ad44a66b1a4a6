//! Entity Module

pub mod auth_state;
pub mod credentials;
pub mod user;
