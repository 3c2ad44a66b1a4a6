//! HTTP Client Adapter
//!
//! Sends requests to the admin API and sorts every failure into one of:
//! - [`HttpError::Application`]: the server answered with a non-2xx status.
//!   The body is kept so callers can read `success` / `message` from it.
//! - [`HttpError::Transport`]: no response arrived (connection refused,
//!   DNS, timeout, body interrupted). There is no payload.
//! - [`HttpError::Decode`]: a 2xx response whose body is not the expected shape.
//!
//! Exactly one attempt is made per call.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;

/// Cache-Control value sent on session checks
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// HTTP adapter errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response
    #[error("{url} responded with {status}")]
    Application {
        url: String,
        status: StatusCode,
        /// JSON body, or the raw text as a JSON string when it is not JSON
        body: Value,
    },

    /// No response received
    #[error("No response from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx response with an unexpected body
    #[error("Unexpected response body from {url} ({status}): {source}")]
    Decode {
        url: String,
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl HttpError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::Application { status, .. } => ErrorKind::from_status_code(status.as_u16()),
            HttpError::Transport { .. } => ErrorKind::Unreachable,
            HttpError::Decode { .. } => ErrorKind::MalformedResponse,
            HttpError::InvalidRequest(_) => ErrorKind::BadRequest,
        }
    }

    /// Response status, if a response arrived
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpError::Application { status, .. } | HttpError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Error payload sent by the server
    pub fn body(&self) -> Option<&Value> {
        match self {
            HttpError::Application { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `message` field of the error payload
    pub fn server_message(&self) -> Option<&str> {
        self.body().and_then(kernel::envelope::message_of)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HttpError::Transport { .. })
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            HttpError::Application { status, .. } => {
                AppError::from_status(status.as_u16(), self.server_message().unwrap_or_default().to_string())
            }
            HttpError::Transport { .. } => AppError::unreachable(),
            HttpError::Decode { .. } => AppError::malformed("The server sent an unexpected response"),
            HttpError::InvalidRequest(msg) => AppError::new(ErrorKind::BadRequest, msg.clone()),
        }
    }
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}

// ============================================================================
// Request descriptor
// ============================================================================

/// Description of one API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    with_credentials: bool,
    bearer: Option<String>,
    no_cache: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            with_credentials: false,
            bearer: None,
            no_cache: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, HttpError> {
        let value = serde_json::to_value(body)
            .map_err(|e| HttpError::InvalidRequest(format!("Body is not serialisable: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Send through the cookie-carrying client
    pub fn with_credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }

    /// Add `Authorization: Bearer <token>`
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Ask intermediaries not to cache the response
    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_credentials(&self) -> bool {
        self.with_credentials
    }
}

// ============================================================================
// Client
// ============================================================================

/// Admin API client
///
/// Holds two `reqwest` clients: one with a cookie jar for requests that
/// must carry the server session cookie, one without for the rest.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ApiConfig,
    anonymous: Client,
    credentialed: Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        let build = |cookies: bool| {
            Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.clone())
                .cookie_store(cookies)
                .build()
                .map_err(|e| HttpError::InvalidRequest(format!("HTTP client setup failed: {e}")))
        };

        let anonymous = build(false)?;
        let credentialed = build(true)?;

        Ok(Self {
            config,
            anonymous,
            credentialed,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and decode a 2xx body into `T`
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, HttpError> {
        let url = self.config.endpoint(&request.path);
        let client = if request.with_credentials {
            &self.credentialed
        } else {
            &self.anonymous
        };

        let mut builder = client.request(request.method.clone(), &url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if request.no_cache {
            builder = builder.header(CACHE_CONTROL, NO_CACHE);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            credentials = request.with_credentials,
            bearer = request.bearer.is_some(),
            "Sending API request"
        );

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(url = %url, error = %source, "API request got no response");
            HttpError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| {
            tracing::warn!(url = %url, error = %source, "API response body interrupted");
            HttpError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            tracing::debug!(url = %url, status = %status, "API returned error status");
            return Err(HttpError::Application { url, status, body });
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(url = %url, status = %status, error = %source, "API response did not decode");
            HttpError::Decode {
                url,
                status,
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::Envelope;
    use kernel::Extra;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpClient {
        let config = ApiConfig::default().with_base_url(&server.uri()).unwrap();
        HttpClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_success_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Logged in", "token": "t1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ApiRequest::post("/api/auth/login")
            .json(&json!({"email": "a@b.c", "password": "pw"}))
            .unwrap()
            .with_credentials();
        let env: Envelope<Extra> = client.send(request).await.unwrap();

        assert!(env.success);
        assert_eq!(env.message.as_deref(), Some("Logged in"));
        assert_eq!(env.data.get("token"), Some(&json!("t1")));
    }

    #[tokio::test]
    async fn test_bearer_and_no_cache_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/auth-check"))
            .and(header("authorization", "Bearer t1"))
            .and(header_exists("cache-control"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ApiRequest::get("/api/auth/auth-check").bearer("t1").no_cache();
        let env: Envelope<Extra> = client.send(request).await.unwrap();
        assert!(env.success);

        // `header()` splits on commas, so compare the raw value
        let received = server.received_requests().await.unwrap();
        let cache_control = received[0].headers.get("cache-control").unwrap();
        assert_eq!(cache_control.to_str().unwrap(), NO_CACHE);
    }

    #[tokio::test]
    async fn test_non_2xx_json_is_application_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"success": false, "message": "Incorrect password"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send::<Envelope<Extra>>(ApiRequest::post("/api/auth/login"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.server_message(), Some("Incorrect password"));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_non_2xx_text_is_kept_as_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/orders/get"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send::<Envelope<Extra>>(ApiRequest::get("/api/admin/orders/get"))
            .await
            .unwrap_err();

        assert_eq!(err.body(), Some(&json!("Bad Gateway")));
        assert_eq!(err.kind(), ErrorKind::BadGateway);
    }

    #[tokio::test]
    async fn test_success_with_bad_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/auth-check"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send::<Envelope<Extra>>(ApiRequest::get("/api/auth/auth-check"))
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Decode { .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_no_listener_is_transport_error() {
        // Bind then drop so the port is (almost certainly) closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = ApiConfig::default()
            .with_base_url(&format!("http://127.0.0.1:{port}"))
            .unwrap();
        let client = HttpClient::new(config).unwrap();

        let err = client
            .send::<Envelope<Extra>>(ApiRequest::post("/api/auth/logout").with_credentials())
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert!(err.body().is_none());
        assert_eq!(err.to_app_error().message(), kernel::error::app_error::FALLBACK_MESSAGE);
    }
}
