//! Response Envelope
//!
//! Every admin API response carries `success` and (usually) `message`
//! next to its data fields. [`Envelope<T>`] keeps the two common fields
//! typed and flattens the rest into `T`.

use serde::{Deserialize, Serialize};

/// Data of responses that carry nothing beyond `success` / `message`.
/// Unknown fields are kept so nothing the server sends is lost.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// `{ success, message, ...data }`
///
/// ## Examples
/// ```rust
/// use kernel::Envelope;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Data {
///     token: Option<String>,
/// }
///
/// let body = r#"{"success":true,"message":"Logged in","token":"t1"}"#;
/// let envelope: Envelope<Data> = serde_json::from_str(body).unwrap();
/// assert!(envelope.success);
/// assert_eq!(envelope.data.token.as_deref(), Some("t1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Business outcome reported by the server
    #[serde(default)]
    pub success: bool,
    /// Human readable message (absent on some endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(success: bool, message: Option<String>, data: T) -> Self {
        Self {
            success,
            message,
            data,
        }
    }

    /// Message, or `fallback` when the server sent none
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            data: f(self.data),
        }
    }
}

/// Extract `message` from an arbitrary JSON body (used for error bodies
/// whose shape is not guaranteed).
pub fn message_of(body: &serde_json::Value) -> Option<&str> {
    match body {
        serde_json::Value::Object(map) => map.get("message").and_then(|m| m.as_str()),
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let env: Envelope<Extra> = serde_json::from_value(json!({})).unwrap();
        assert!(!env.success);
        assert!(env.message.is_none());
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let env: Envelope<Extra> =
            serde_json::from_value(json!({"success": true, "message": "ok", "id": 7})).unwrap();
        assert_eq!(env.data.get("id"), Some(&json!(7)));
        assert!(!env.data.contains_key("success"));
    }

    #[test]
    fn test_message_or() {
        let env = Envelope::new(false, Some(" ".to_string()), ());
        assert_eq!(env.message_or("fallback"), "fallback");

        let env = Envelope::new(true, Some("Logged out".to_string()), ());
        assert_eq!(env.message_or("fallback"), "Logged out");
    }

    #[test]
    fn test_message_of() {
        assert_eq!(
            message_of(&json!({"success": false, "message": "bad creds"})),
            Some("bad creds")
        );
        assert_eq!(message_of(&json!("Bad Gateway")), Some("Bad Gateway"));
        assert_eq!(message_of(&json!(42)), None);
        assert_eq!(message_of(&json!({"success": false})), None);
    }
}
