//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Auth state reducer, entities, value objects, gateway / repository traits
//! - `application/` - Use cases, the published store and the service facade
//! - `infra/` - HTTP gateway and session storage implementations
//! - `presentation/` - View bindings (forms, header, logout, toasts)
//!
//! ## State machine
//! - register / login / session check / logout each go Pending → Fulfilled | Rejected
//! - A fulfilled response with `success: false` clears credentials like a rejection
//! - The bearer token lives in the Session Record so a restart can pick it up
//! - No retries, no serialisation of overlapping operations (last to settle wins)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, AuthService, AuthStore};
pub use domain::{AuthEvent, AuthState, Phase, Rejection};
pub use error::{AuthError, AuthResult};
pub use infra::{HttpAuthGateway, StorageSessionRecord};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::payload::*;
    pub use crate::domain::value_object::*;
}
