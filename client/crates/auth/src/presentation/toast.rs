//! Phase → Toast mapping
//!
//! How a settled operation is announced to the user.

use kernel::Envelope;
use kernel::error::app_error::FALLBACK_MESSAGE;
use platform::ui::Toast;

use crate::domain::phase::Phase;

/// Title used when a successful response carries no message
pub const DEFAULT_SUCCESS_TITLE: &str = "Success";

/// Toast for a settled phase (`None` while pending)
///
/// - `success: true` → the server message
/// - `success: false` → the server message, destructive
/// - rejected → the error payload's message or the fallback, destructive
pub fn settled_toast<T>(phase: &Phase<Envelope<T>>) -> Option<Toast> {
    match phase {
        Phase::Pending => None,
        Phase::Fulfilled(payload) if payload.success => {
            Some(Toast::info(payload.message_or(DEFAULT_SUCCESS_TITLE)))
        }
        Phase::Fulfilled(payload) => Some(Toast::destructive(payload.message_or(FALLBACK_MESSAGE))),
        Phase::Rejected(rejection) => Some(Toast::destructive(rejection.user_message())),
    }
}

/// Whether a settled phase is a server-confirmed success
pub fn succeeded<T>(phase: &Phase<Envelope<T>>) -> bool {
    phase.payload().is_some_and(|payload| payload.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::Rejection;
    use kernel::Extra;
    use serde_json::json;

    #[test]
    fn test_success_uses_server_message() {
        let phase = Phase::Fulfilled(Envelope::new(true, Some("Logged in".into()), Extra::new()));
        let toast = settled_toast(&phase).unwrap();
        assert_eq!(toast.title, "Logged in");
        assert!(!toast.is_destructive());
        assert!(succeeded(&phase));
    }

    #[test]
    fn test_business_failure_is_destructive() {
        let phase = Phase::Fulfilled(Envelope::new(false, Some("bad creds".into()), Extra::new()));
        let toast = settled_toast(&phase).unwrap();
        assert_eq!(toast, Toast::destructive("bad creds"));
        assert!(!succeeded(&phase));
    }

    #[test]
    fn test_rejections() {
        let phase: Phase<Envelope<Extra>> = Phase::Rejected(Rejection::Application {
            status: 409,
            body: json!({"success": false, "message": "User already exists"}),
        });
        assert_eq!(
            settled_toast(&phase),
            Some(Toast::destructive("User already exists"))
        );

        let phase: Phase<Envelope<Extra>> =
            Phase::Rejected(Rejection::Transport("connection refused".into()));
        assert_eq!(settled_toast(&phase), Some(Toast::destructive(FALLBACK_MESSAGE)));

        assert_eq!(settled_toast::<Extra>(&Phase::Pending), None);
    }
}
