//! Login / Register form bindings
//!
//! Submit a form through the service, then announce the outcome.

use std::sync::Arc;

use platform::ui::{Navigator, Notifier};

use crate::application::service::AuthService;
use crate::domain::entity::credentials::{LoginForm, RegisterForm};
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::{LoginPayload, RegisterPayload};
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;
use crate::presentation::toast::{settled_toast, succeeded};

/// Bindings for the `/auth/login` and `/auth/register` screens
pub struct AuthForms<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    service: Arc<AuthService<G, R>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<G, R> AuthForms<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    pub fn new(
        service: Arc<AuthService<G, R>>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            service,
            notifier,
            navigator,
        }
    }

    pub async fn submit_login(&self, form: &LoginForm) -> Phase<LoginPayload> {
        let phase = self.service.login(form).await;
        if let Some(toast) = settled_toast(&phase) {
            self.notifier.notify(toast);
        }
        phase
    }

    /// A successful registration moves on to the login screen
    pub async fn submit_register(&self, form: &RegisterForm) -> Phase<RegisterPayload> {
        let phase = self.service.register(form).await;
        if let Some(toast) = settled_toast(&phase) {
            self.notifier.notify(toast);
        }
        if succeeded(&phase) {
            self.navigator.navigate(&self.service.config().login_route);
        }
        phase
    }
}
