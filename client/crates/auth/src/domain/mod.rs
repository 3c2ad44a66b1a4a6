//! Domain Layer
//!
//! Contains entities, value objects, operation phases and the gateway /
//! repository traits.

pub mod entity;
pub mod gateway;
pub mod payload;
pub mod phase;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_state::{AuthEvent, AuthState},
    credentials::{LoginForm, RegisterForm},
    user::User,
};
pub use gateway::{AuthGateway, LocalAuthGateway};
pub use phase::{Phase, Rejection};
pub use repository::SessionRecordRepository;
