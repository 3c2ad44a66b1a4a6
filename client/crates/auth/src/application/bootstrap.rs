//! Bootstrap Use Case
//!
//! Runs once at startup: restores the bearer token from the Session Record
//! and validates it, so a reload keeps the user signed in.

use std::sync::Arc;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::store::AuthStore;
use crate::domain::entity::auth_state::AuthEvent;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::SessionCheckPayload;
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;

/// Bootstrap use case
pub struct BootstrapUseCase<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    check_session: CheckSessionUseCase<G>,
    session: Arc<R>,
    store: AuthStore,
}

impl<G, R> BootstrapUseCase<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    pub fn new(gateway: Arc<G>, session: Arc<R>, store: AuthStore) -> Self {
        Self {
            check_session: CheckSessionUseCase::new(gateway, store.clone()),
            session,
            store,
        }
    }

    /// Returns the session check phase, or `None` when there was no stored
    /// token and no request was made.
    pub async fn execute(&self) -> Option<Phase<SessionCheckPayload>> {
        let token = match self.session.read() {
            Ok(token) => token,
            Err(e) => {
                e.log();
                // Unreadable record: start over rather than keep failing
                if let Err(e) = self.session.clear() {
                    e.log();
                }
                None
            }
        };

        match token {
            Some(token) => {
                self.store.dispatch(&AuthEvent::RestoreToken(token));
                Some(self.check_session.execute().await)
            }
            None => {
                tracing::debug!("No stored session");
                self.store.dispatch(&AuthEvent::SettleAnonymous);
                None
            }
        }
    }
}
