//! User Entity
//!
//! The signed-in account as the API describes it.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_role::UserRole;

/// User entity
///
/// Only `userName` is relied on by the views (the order dialog shows it in
/// the shipping block). Anything else the server sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: UserRole,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            id: None,
            user_name: user_name.into(),
            email: None,
            role: UserRole::default(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A null role reads as the default role
fn role_or_default<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<UserRole>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_user() {
        let user: User = serde_json::from_value(json!({
            "id": "65f0c1",
            "userName": "a",
            "email": "a@example.com",
            "role": "admin",
            "avatar": "x.png"
        }))
        .unwrap();

        assert_eq!(user.user_name, "a");
        assert!(user.is_admin());
        assert_eq!(user.extra.get("avatar"), Some(&json!("x.png")));
    }

    #[test]
    fn test_minimal_user() {
        let user: User = serde_json::from_value(json!({"userName": "a"})).unwrap();
        assert_eq!(user, User::new("a"));
    }

    #[test]
    fn test_lenient_user_shape() {
        let user: User = serde_json::from_value(json!({"userName": "a", "role": null})).unwrap();
        assert_eq!(user.role, UserRole::User);

        let user: User = serde_json::from_value(json!({"email": "a@example.com"})).unwrap();
        assert_eq!(user.user_name, "");
        assert_eq!(user.email.as_deref(), Some("a@example.com"));
    }
}
