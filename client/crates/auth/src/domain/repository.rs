//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Session Record repository trait
///
/// Session storage is synchronous (like a browser's `sessionStorage`), so
/// this trait is too.
pub trait SessionRecordRepository: Send + Sync {
    /// Store the bearer token
    fn persist(&self, token: &SessionToken) -> AuthResult<()>;

    /// Read the bearer token back
    fn read(&self) -> AuthResult<Option<SessionToken>>;

    /// Remove the bearer token
    fn clear(&self) -> AuthResult<()>;

    /// Wipe the whole session store
    fn clear_all(&self) -> AuthResult<()>;
}
