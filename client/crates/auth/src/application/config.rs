//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session store key holding the bearer token
    pub session_key: String,
    /// `POST` registration endpoint
    pub register_path: String,
    /// `POST` login endpoint
    pub login_path: String,
    /// `GET` session check endpoint
    pub check_path: String,
    /// `POST` logout endpoint
    pub logout_path: String,
    /// Route shown after signing out
    pub login_route: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: "token".to_string(),
            register_path: "/api/auth/register".to_string(),
            login_path: "/api/auth/login".to_string(),
            check_path: "/api/auth/auth-check".to_string(),
            logout_path: "/api/auth/logout".to_string(),
            login_route: "/auth/login".to_string(),
        }
    }
}

impl AuthConfig {
    /// Use a different session store key
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }
}
