//! Shared Kernel - Vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" of the admin client:
//! - Error classification mapped from HTTP statuses
//! - The user-facing error type rendered by view bindings
//! - The `{ success, message, ... }` envelope every API response uses
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod envelope;

pub use envelope::{Envelope, Extra};
pub use error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
