//! Login Use Case
//!
//! Authenticates with email + password and keeps the issued bearer token
//! in the Session Record.

use std::sync::Arc;

use crate::application::store::AuthStore;
use crate::domain::entity::auth_state::AuthEvent;
use crate::domain::entity::credentials::LoginForm;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::LoginPayload;
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;

/// Login use case
pub struct LoginUseCase<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    gateway: Arc<G>,
    session: Arc<R>,
    store: AuthStore,
}

impl<G, R> LoginUseCase<G, R>
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

    pub async fn execute(&self, form: &LoginForm) -> Phase<LoginPayload> {
        self.store.dispatch(&AuthEvent::Login(Phase::Pending));

        let phase = Phase::from(self.gateway.login(form).await);
        match &phase {
            Phase::Fulfilled(payload) => {
                self.store_token(payload);
                tracing::info!(
                    email = %form.email,
                    success = payload.success,
                    has_token = payload.data.token.is_some(),
                    "Login settled"
                );
            }
            Phase::Rejected(rejection) => tracing::warn!(
                email = %form.email,
                kind = %rejection.kind(),
                "Login rejected"
            ),
            Phase::Pending => {}
        }

        self.store.dispatch(&AuthEvent::Login(phase.clone()));
        phase
    }

    /// The Session Record mirrors `payload.token`: written when present,
    /// cleared when absent. A storage failure does not fail the login.
    fn store_token(&self, payload: &LoginPayload) {
        let result = match &payload.data.token {
            Some(token) => self.session.persist(token),
            None => self.session.clear(),
        };
        if let Err(e) = result {
            e.log();
        }
    }
}
