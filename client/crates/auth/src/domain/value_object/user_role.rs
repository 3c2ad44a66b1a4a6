use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role reported by the API for the signed-in account
///
/// Unknown roles are kept verbatim so a newer server does not break
/// deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    #[display("user")]
    User,
    #[display("admin")]
    Admin,
    #[serde(untagged)]
    #[display("{_0}")]
    Other(String),
}

impl UserRole {
    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            other => UserRole::Other(other.to_string()),
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Other(code) => code,
        }
    }

    /// Whether this role may use the admin panel
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}
