//! Auth State Entity
//!
//! The in-memory record of who is signed in. Every change goes through
//! [`AuthState::apply`], a pure reducer over [`AuthEvent`].

use crate::domain::entity::user::User;
use crate::domain::payload::{
    LoginPayload, LogoutPayload, RegisterPayload, SessionCheckPayload,
};
use crate::domain::phase::Phase;
use crate::domain::value_object::session_token::SessionToken;

/// Authentication state
///
/// `user` is only assigned in a transition that also assigns
/// `is_authenticated = true`, so `user.is_some()` implies `is_authenticated`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
    pub token: Option<SessionToken>,
}

impl Default for AuthState {
    /// Loading until the first session check settles
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
            token: None,
        }
    }
}

/// Something that changes [`AuthState`]
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    Register(Phase<RegisterPayload>),
    Login(Phase<LoginPayload>),
    SessionCheck(Phase<SessionCheckPayload>),
    Logout(Phase<LogoutPayload>),
    /// Local sign-out with no network call
    ResetCredentials,
    /// Token read back from the Session Record at startup
    RestoreToken(SessionToken),
    /// Startup found no stored session
    SettleAnonymous,
}

impl AuthEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AuthEvent::Register(_) => "register",
            AuthEvent::Login(_) => "login",
            AuthEvent::SessionCheck(_) => "session_check",
            AuthEvent::Logout(_) => "logout",
            AuthEvent::ResetCredentials => "reset_credentials",
            AuthEvent::RestoreToken(_) => "restore_token",
            AuthEvent::SettleAnonymous => "settle_anonymous",
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn apply(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::Register(phase) => self.on_register(phase),
            AuthEvent::Login(phase) => self.on_login(phase),
            AuthEvent::SessionCheck(phase) => self.on_session_check(phase),
            AuthEvent::Logout(phase) => self.on_logout(phase),
            AuthEvent::ResetCredentials => self.reset_credentials(),
            AuthEvent::RestoreToken(token) => self.token = Some(token.clone()),
            AuthEvent::SettleAnonymous => {
                self.is_loading = false;
                self.sign_out();
            }
        }
        debug_assert!(self.holds_invariant());
    }

    /// Registration never authenticates
    fn on_register(&mut self, phase: &Phase<RegisterPayload>) {
        match phase {
            Phase::Pending => self.is_loading = true,
            Phase::Fulfilled(_) | Phase::Rejected(_) => {
                self.is_loading = false;
                self.sign_out();
            }
        }
    }

    fn on_login(&mut self, phase: &Phase<LoginPayload>) {
        match phase {
            Phase::Pending => self.is_loading = true,
            Phase::Fulfilled(payload) => {
                self.is_loading = false;
                self.authenticate(payload.success, payload.data.user.clone());
                self.token = payload.data.token.clone();
            }
            Phase::Rejected(_) => {
                self.is_loading = false;
                self.sign_out();
            }
        }
    }

    fn on_session_check(&mut self, phase: &Phase<SessionCheckPayload>) {
        match phase {
            Phase::Pending => self.is_loading = true,
            Phase::Fulfilled(payload) => {
                self.is_loading = false;
                self.authenticate(payload.success, payload.data.user.clone());
            }
            Phase::Rejected(_) => {
                self.is_loading = false;
                self.sign_out();
                self.token = None;
            }
        }
    }

    fn on_logout(&mut self, phase: &Phase<LogoutPayload>) {
        match phase {
            Phase::Pending => self.is_loading = true,
            Phase::Fulfilled(_) | Phase::Rejected(_) => {
                self.is_loading = false;
                self.sign_out();
                self.token = None;
            }
        }
    }

    /// Clear credentials without touching `is_loading`
    pub fn reset_credentials(&mut self) {
        self.sign_out();
        self.token = None;
    }

    fn authenticate(&mut self, success: bool, user: Option<User>) {
        self.is_authenticated = success;
        self.user = if success { user } else { None };
    }

    fn sign_out(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }

    /// `user.is_some()` implies `is_authenticated`
    pub fn holds_invariant(&self) -> bool {
        self.user.is_none() || self.is_authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_name.as_str())
    }
}
