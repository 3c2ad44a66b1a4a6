//! Session Record Implementation
//!
//! Keeps the bearer token in a [`KeyValueStore`] as a JSON string, so
//! token `t1` is stored as `"t1"`.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRecordRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Key-value backed Session Record
#[derive(Debug, Clone)]
pub struct StorageSessionRecord<S>
where
    S: KeyValueStore,
{
    store: S,
    config: Arc<AuthConfig>,
}

impl<S> StorageSessionRecord<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> SessionRecordRepository for StorageSessionRecord<S>
where
    S: KeyValueStore,
{
    fn persist(&self, token: &SessionToken) -> AuthResult<()> {
        let raw = serde_json::to_string(token).map_err(AuthError::CorruptToken)?;
        self.store.set(&self.config.session_key, &raw)?;
        tracing::debug!(key = %self.config.session_key, "Session token stored");
        Ok(())
    }

    fn read(&self) -> AuthResult<Option<SessionToken>> {
        let Some(raw) = self.store.get(&self.config.session_key)? else {
            return Ok(None);
        };
        let token: Option<String> = serde_json::from_str(&raw).map_err(AuthError::CorruptToken)?;
        Ok(token.and_then(SessionToken::new))
    }

    fn clear(&self) -> AuthResult<()> {
        self.store.remove(&self.config.session_key)?;
        Ok(())
    }

    fn clear_all(&self) -> AuthResult<()> {
        self.store.clear()?;
        Ok(())
    }
}
