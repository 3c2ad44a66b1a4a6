//! Value Object Module

pub mod email;
pub mod password;
pub mod session_token;
pub mod user_role;
