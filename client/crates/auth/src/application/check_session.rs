//! Check Session Use Case
//!
//! Asks the server whether the current bearer token is still valid.

use std::sync::Arc;

use crate::application::store::AuthStore;
use crate::domain::entity::auth_state::AuthEvent;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::SessionCheckPayload;
use crate::domain::phase::Phase;

/// Check session use case
pub struct CheckSessionUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
    store: AuthStore,
}

impl<G> CheckSessionUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>, store: AuthStore) -> Self {
        Self { gateway, store }
    }

    /// Check the token currently held in the state
    pub async fn execute(&self) -> Phase<SessionCheckPayload> {
        let token = self.store.snapshot().token;
        self.store.dispatch(&AuthEvent::SessionCheck(Phase::Pending));

        let phase = Phase::from(self.gateway.check_session(token.as_ref()).await);
        match &phase {
            Phase::Fulfilled(payload) => tracing::info!(
                success = payload.success,
                user_name = payload.data.user.as_ref().map(|u| u.user_name.as_str()),
                "Session check settled"
            ),
            Phase::Rejected(rejection) => tracing::warn!(
                kind = %rejection.kind(),
                had_token = token.is_some(),
                "Session check rejected"
            ),
            Phase::Pending => {}
        }

        self.store.dispatch(&AuthEvent::SessionCheck(phase.clone()));
        phase
    }
}
