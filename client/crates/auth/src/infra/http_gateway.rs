//! HTTP Gateway Implementation
//!
//! [`AuthGateway`] over the platform HTTP client.

use std::sync::Arc;

use platform::http::{ApiRequest, HttpClient, HttpError};
use serde_json::json;

use crate::application::config::AuthConfig;
use crate::domain::entity::credentials::{LoginForm, RegisterForm};
use crate::domain::gateway::AuthGateway;
use crate::domain::payload::{LoginPayload, LogoutPayload, RegisterPayload, SessionCheckPayload};
use crate::domain::phase::Rejection;
use crate::domain::value_object::session_token::SessionToken;

impl From<HttpError> for Rejection {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Application { status, body, .. } => Rejection::Application {
                status: status.as_u16(),
                body,
            },
            HttpError::Transport { source, .. } => Rejection::Transport(source.to_string()),
            HttpError::Decode { source, .. } => Rejection::Malformed(source.to_string()),
            // Never left the client, so there is no payload either
            HttpError::InvalidRequest(msg) => Rejection::Transport(msg),
        }
    }
}

/// HTTP-backed auth gateway
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: HttpClient,
    config: Arc<AuthConfig>,
}

impl HttpAuthGateway {
    pub fn new(client: HttpClient, config: Arc<AuthConfig>) -> Self {
        Self { client, config }
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn register(&self, form: &RegisterForm) -> Result<RegisterPayload, Rejection> {
        let request = ApiRequest::post(&self.config.register_path)
            .json(form)?
            .with_credentials();
        Ok(self.client.send(request).await?)
    }

    async fn login(&self, form: &LoginForm) -> Result<LoginPayload, Rejection> {
        let request = ApiRequest::post(&self.config.login_path)
            .json(form)?
            .with_credentials();
        Ok(self.client.send(request).await?)
    }

    async fn check_session(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<SessionCheckPayload, Rejection> {
        let mut request = ApiRequest::get(&self.config.check_path).no_cache();
        if let Some(token) = token {
            request = request.bearer(token.as_str());
        }
        Ok(self.client.send(request).await?)
    }

    async fn logout(&self) -> Result<LogoutPayload, Rejection> {
        let request = ApiRequest::post(&self.config.logout_path)
            .json(&json!({}))?
            .with_credentials();
        Ok(self.client.send(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::config::ApiConfig;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpAuthGateway {
        let config = ApiConfig::default().with_base_url(&server.uri()).unwrap();
        HttpAuthGateway::new(
            HttpClient::new(config).unwrap(),
            Arc::new(AuthConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "a@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Logged in successfully",
                "user": {"userName": "a", "role": "admin"},
                "token": "t1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let form = LoginForm::new("a@example.com", "pw").unwrap();
        let payload = gateway.login(&form).await.unwrap();

        assert!(payload.success);
        assert_eq!(payload.data.token.unwrap().as_str(), "t1");
    }

    #[tokio::test]
    async fn test_register_sends_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(body_json(json!({
                "userName": "a",
                "email": "a@example.com",
                "password": "pw"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Registration successful"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let form = RegisterForm::new("a", "a@example.com", "pw").unwrap();
        let payload = gateway.register(&form).await.unwrap();
        assert_eq!(payload.message.as_deref(), Some("Registration successful"));
    }

    #[tokio::test]
    async fn test_check_session_sends_bearer_and_no_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/auth-check"))
            .and(header("authorization", "Bearer t1"))
            .and(header_exists("cache-control"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Authenticated user!",
                "user": {"userName": "a"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let token = SessionToken::new("t1").unwrap();
        let payload = gateway.check_session(Some(&token)).await.unwrap();
        assert_eq!(payload.data.user.unwrap().user_name, "a");

        let received = server.received_requests().await.unwrap();
        let cache_control = received[0].headers.get("cache-control").unwrap();
        assert_eq!(cache_control.to_str().unwrap(), platform::http::NO_CACHE);
    }

    #[tokio::test]
    async fn test_logout_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/logout"))
            .and(body_json(json!({})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Logged out successfully!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        assert!(gateway.logout().await.unwrap().success);
    }

    #[tokio::test]
    async fn test_error_status_becomes_application_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/auth-check"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"success": false, "message": "Unauthorised user!"})),
            )
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let rejection = gateway.check_session(None).await.unwrap_err();
        assert!(matches!(rejection, Rejection::Application { status: 401, .. }));
        assert_eq!(rejection.user_message(), "Unauthorised user!");
    }
}
