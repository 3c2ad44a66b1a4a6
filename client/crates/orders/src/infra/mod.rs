//! Infrastructure Layer
//!
//! HTTP gateway implementation.

pub mod http_gateway;

pub use http_gateway::HttpOrderGateway;
