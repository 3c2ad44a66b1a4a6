//! UI Collaborators
//!
//! Seams between view bindings and the outside world: toast notifications
//! and route navigation. Bindings depend on these traits only.

use parking_lot::Mutex;

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// `{ title, variant? }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Receives toasts
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Moves the user to another route
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Notifier that writes toasts to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => tracing::info!(title = %toast.title, "Toast"),
            ToastVariant::Destructive => tracing::warn!(title = %toast.title, "Toast"),
        }
    }
}

/// Keeps every toast it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

/// Keeps every path it is asked to navigate to
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Toast::info("Logged out successfully"));
        notifier.notify(Toast::destructive("Something went wrong...!"));

        assert_eq!(notifier.toasts().len(), 2);
        assert!(notifier.last().unwrap().is_destructive());
    }

    #[test]
    fn test_recording_navigator() {
        let navigator = RecordingNavigator::new();
        assert_eq!(navigator.current(), None);
        navigator.navigate("/auth/login");
        assert_eq!(navigator.current().as_deref(), Some("/auth/login"));
    }
}
