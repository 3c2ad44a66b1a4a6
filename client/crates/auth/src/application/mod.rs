//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod check_session;
pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod service;
pub mod store;

// Re-exports
pub use bootstrap::BootstrapUseCase;
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use register::RegisterUseCase;
pub use service::AuthService;
pub use store::AuthStore;
