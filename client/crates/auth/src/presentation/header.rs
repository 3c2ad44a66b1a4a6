//! Admin Header
//!
//! The top bar of the admin layout: a menu toggle and a logout button.

use std::sync::Arc;

use platform::ui::Navigator;

use crate::application::service::AuthService;
use crate::domain::gateway::AuthGateway;
use crate::domain::repository::SessionRecordRepository;

/// Admin header binding
pub struct AdminHeader<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    service: Arc<AuthService<G, R>>,
    navigator: Arc<dyn Navigator>,
    set_open: Box<dyn Fn(bool) + Send + Sync>,
}

impl<G, R> AdminHeader<G, R>
where
    G: AuthGateway,
    R: SessionRecordRepository,
{
    pub fn new(
        service: Arc<AuthService<G, R>>,
        navigator: Arc<dyn Navigator>,
        set_open: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        Self {
            service,
            navigator,
            set_open: Box::new(set_open),
        }
    }

    /// Open the sidebar
    pub fn open_menu(&self) {
        (self.set_open)(true);
    }

    /// Sign out without asking the server, then go to the login screen
    pub fn handle_logout(&self) {
        self.service.sign_out_locally();
        self.navigator.navigate(&self.service.config().login_route);
    }
}
