//! Auth Service
//!
//! One handle bundling the store, the use cases and the local sign-out.
//! Views and the CLI talk to this instead of wiring use cases themselves.

use std::sync::Arc;

use crate::application::{
    bootstrap::BootstrapUseCase, check_session::CheckSessionUseCase, config::AuthConfig,
    login::LoginUseCase, logout::LogoutUseCase, register::RegisterUseCase, store::AuthStore,
};
use crate::domain::entity::auth_state::AuthState;
use crate::domain::entity::credentials::{LoginForm, RegisterForm};
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::{LoginPayload, LogoutPayload, RegisterPayload, SessionCheckPayload};
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;

/// Auth service
pub struct AuthService<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    store: AuthStore,
    session: Arc<R>,
    config: Arc<AuthConfig>,
    register: RegisterUseCase<G>,
    login: LoginUseCase<G, R>,
    check_session: CheckSessionUseCase<G>,
    logout: LogoutUseCase<G, R>,
    bootstrap: BootstrapUseCase<G, R>,
}

impl<G, R> AuthService<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    pub fn new(gateway: Arc<G>, session: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self::with_store(gateway, session, config, AuthStore::new())
    }

    pub fn with_store(
        gateway: Arc<G>,
        session: Arc<R>,
        config: Arc<AuthConfig>,
        store: AuthStore,
    ) -> Self {
        Self {
            register: RegisterUseCase::new(gateway.clone(), store.clone()),
            login: LoginUseCase::new(gateway.clone(), session.clone(), store.clone()),
            check_session: CheckSessionUseCase::new(gateway.clone(), store.clone()),
            logout: LogoutUseCase::new(gateway.clone(), session.clone(), store.clone()),
            bootstrap: BootstrapUseCase::new(gateway, session.clone(), store.clone()),
            store,
            session,
            config,
        }
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    pub async fn register(&self, form: &RegisterForm) -> Phase<RegisterPayload> {
        self.register.execute(form).await
    }

    pub async fn login(&self, form: &LoginForm) -> Phase<LoginPayload> {
        self.login.execute(form).await
    }

    pub async fn check_session(&self) -> Phase<SessionCheckPayload> {
        self.check_session.execute().await
    }

    pub async fn logout(&self) -> Phase<LogoutPayload> {
        self.logout.execute().await
    }

    pub async fn bootstrap(&self) -> Option<Phase<SessionCheckPayload>> {
        self.bootstrap.execute().await
    }

    /// Clear credentials without a network call
    pub fn reset_credentials(&self) {
        self.store.reset_credentials();
    }

    /// Fire-and-forget sign-out: reset credentials and wipe the whole
    /// session store. The server session is left to expire.
    pub fn sign_out_locally(&self) {
        self.store.reset_credentials();
        if let Err(e) = self.session.clear_all() {
            e.log();
        }
        tracing::info!("Signed out locally");
    }
}
