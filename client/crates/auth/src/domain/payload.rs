//! Operation Payloads
//!
//! Successful (2xx) bodies of the four auth endpoints.

use kernel::{Envelope, Extra};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::session_token::SessionToken;

/// `POST /api/auth/register`
pub type RegisterPayload = Envelope<Extra>;

/// `POST /api/auth/login`
pub type LoginPayload = Envelope<LoginData>;

/// `GET /api/auth/auth-check`
pub type SessionCheckPayload = Envelope<SessionData>;

/// `POST /api/auth/logout`
pub type LogoutPayload = Envelope<Extra>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "token_or_none")]
    pub token: Option<SessionToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub user: Option<User>,
}

/// Blank or null tokens count as no token
fn token_or_none<'de, D>(deserializer: D) -> Result<Option<SessionToken>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(SessionToken::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_payload_success() {
        let payload: LoginPayload = serde_json::from_value(json!({
            "success": true,
            "message": "Logged in successfully",
            "user": {"userName": "a", "role": "admin"},
            "token": "t1"
        }))
        .unwrap();

        assert!(payload.success);
        assert_eq!(payload.data.user.unwrap().user_name, "a");
        assert_eq!(payload.data.token.unwrap().as_str(), "t1");
    }

    #[test]
    fn test_login_payload_business_failure() {
        let payload: LoginPayload =
            serde_json::from_value(json!({"success": false, "message": "bad creds"})).unwrap();
        assert!(!payload.success);
        assert!(payload.data.user.is_none());
        assert!(payload.data.token.is_none());
    }

    #[test]
    fn test_blank_and_null_tokens() {
        let payload: LoginPayload =
            serde_json::from_value(json!({"success": true, "token": ""})).unwrap();
        assert!(payload.data.token.is_none());

        let payload: LoginPayload =
            serde_json::from_value(json!({"success": true, "token": null})).unwrap();
        assert!(payload.data.token.is_none());
    }

    #[test]
    fn test_login_payload_with_null_role() {
        let payload: LoginPayload = serde_json::from_value(json!({
            "success": true,
            "token": "t1",
            "user": {"userName": "a", "role": null}
        }))
        .unwrap();

        let user = payload.data.user.unwrap();
        assert_eq!(user.user_name, "a");
        assert!(!user.is_admin());
        assert_eq!(payload.data.token.unwrap().as_str(), "t1");
    }
}
