//! Register Use Case
//!
//! Creates an account. Never signs the user in: the login screen follows.

use std::sync::Arc;

use crate::application::store::AuthStore;
use crate::domain::entity::auth_state::AuthEvent;
use crate::domain::entity::credentials::RegisterForm;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::RegisterPayload;
use crate::domain::phase::Phase;

/// Register use case
pub struct RegisterUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
    store: AuthStore,
}

impl<G> RegisterUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>, store: AuthStore) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self, form: &RegisterForm) -> Phase<RegisterPayload> {
        self.store.dispatch(&AuthEvent::Register(Phase::Pending));

        let phase = Phase::from(self.gateway.register(form).await);
        match &phase {
            Phase::Fulfilled(payload) => tracing::info!(
                user_name = %form.user_name,
                success = payload.success,
                "Registration settled"
            ),
            Phase::Rejected(rejection) => tracing::warn!(
                user_name = %form.user_name,
                kind = %rejection.kind(),
                "Registration rejected"
            ),
            Phase::Pending => {}
        }

        self.store.dispatch(&AuthEvent::Register(phase.clone()));
        phase
    }
}
