//! Infrastructure Layer
//!
//! HTTP gateway and session storage implementations.

pub mod http_gateway;
pub mod session_record;

pub use http_gateway::HttpAuthGateway;
pub use session_record::StorageSessionRecord;
