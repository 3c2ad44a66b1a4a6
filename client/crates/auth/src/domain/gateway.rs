//! Gateway Traits
//!
//! The auth API as the state machine sees it. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::credentials::{LoginForm, RegisterForm};
use crate::domain::payload::{
    LoginPayload, LogoutPayload, RegisterPayload, SessionCheckPayload,
};
use crate::domain::phase::Rejection;
use crate::domain::value_object::session_token::SessionToken;

/// Auth API gateway trait
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// `POST /api/auth/register`
    async fn register(&self, form: &RegisterForm) -> Result<RegisterPayload, Rejection>;

    /// `POST /api/auth/login`
    async fn login(&self, form: &LoginForm) -> Result<LoginPayload, Rejection>;

    /// `GET /api/auth/auth-check` with the bearer token
    async fn check_session(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<SessionCheckPayload, Rejection>;

    /// `POST /api/auth/logout`
    async fn logout(&self) -> Result<LogoutPayload, Rejection>;
}
