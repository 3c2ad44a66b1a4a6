//! Server-acknowledged logout binding
//!
//! Unlike [`AdminHeader::handle_logout`](super::header::AdminHeader::handle_logout),
//! this waits for the server to end its session.

use std::sync::Arc;

use platform::ui::{Navigator, Notifier, Toast};

use crate::application::service::AuthService;
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::LogoutPayload;
use crate::domain::phase::Phase;
use crate::domain::repository::SessionRecordRepository;
use crate::presentation::toast::DEFAULT_SUCCESS_TITLE;

/// Shown whenever the server did not confirm the logout
pub const LOGOUT_FAILED_TITLE: &str = "Something went wrong...!";

pub struct ServerLogout<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    service: Arc<AuthService<G, R>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<G, R> ServerLogout<G, R>
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

    pub async fn handle_logout(&self) -> Phase<LogoutPayload> {
        let phase = self.service.logout().await;
        match phase.payload() {
            Some(payload) if payload.success => {
                self.notifier
                    .notify(Toast::info(payload.message_or(DEFAULT_SUCCESS_TITLE)));
                self.navigator.navigate(&self.service.config().login_route);
            }
            _ => self.notifier.notify(Toast::destructive(LOGOUT_FAILED_TITLE)),
        }
        phase
    }
}
