//! Auth Store
//!
//! Owns the single [`AuthState`] and publishes every change through a
//! `tokio::sync::watch` channel. Views hold a receiver and re-render when
//! it changes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::entity::auth_state::{AuthEvent, AuthState};

/// Shared handle to the auth state
///
/// Cloning is cheap; every clone sees the same state. Events are applied
/// in the order they arrive, so when two operations overlap the one that
/// settles last wins.
#[derive(Debug, Clone)]
pub struct AuthStore {
    state: Arc<watch::Sender<AuthState>>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self::with_state(AuthState::default())
    }

    pub fn with_state(initial: AuthState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state: Arc::new(state),
        }
    }

    /// Current state
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every change
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Apply an event and notify subscribers
    pub fn dispatch(&self, event: &AuthEvent) {
        self.state.send_modify(|state| state.apply(event));
        tracing::debug!(event = event.name(), "Auth state updated");
    }

    /// Clear credentials without a network call
    pub fn reset_credentials(&self) {
        self.dispatch(&AuthEvent::ResetCredentials);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::Phase;

    #[test]
    fn test_clones_share_state() {
        let store = AuthStore::new();
        let other = store.clone();
        store.dispatch(&AuthEvent::SettleAnonymous);
        assert!(!other.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = AuthStore::new();
        let mut rx = store.subscribe();

        store.dispatch(&AuthEvent::Login(Phase::Pending));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading);

        store.reset_credentials();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_authenticated);
    }
}
