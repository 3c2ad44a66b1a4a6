//! Logout Use Case
//!
//! Ends the server session. The Session Record is cleared up front, and
//! local credentials are cleared whatever the server says.

use std::sync::Arc;

use crate::application::store::AuthStore;
use crate::domain::entity::auth_state::AuthEvent;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::LogoutPayload;
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;

/// Logout use case
pub struct LogoutUseCase<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    gateway: Arc<G>,
    session: Arc<R>,
    store: AuthStore,
}

impl<G, R> LogoutUseCase<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    pub fn new(gateway: Arc<G>, session: Arc<R>, store: AuthStore) -> Self {
        Self {
            gateway,
            session,
            store,
        }
    }

    pub async fn execute(&self) -> Phase<LogoutPayload> {
        if let Err(e) = self.session.clear() {
            e.log();
        }
        self.store.dispatch(&AuthEvent::Logout(Phase::Pending));

        let phase = Phase::from(self.gateway.logout().await);
        match &phase {
            Phase::Fulfilled(payload) => {
                tracing::info!(success = payload.success, "Logout settled")
            }
            Phase::Rejected(rejection) => {
                tracing::warn!(kind = %rejection.kind(), "Logout rejected")
            }
            Phase::Pending => {}
        }

        self.store.dispatch(&AuthEvent::Logout(phase.clone()));
        phase
    }
}
