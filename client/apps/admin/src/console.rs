//! Terminal notifier
//!
//! Toasts become lines on stdout (or stderr when destructive).

use platform::ui::{Notifier, Toast};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        if toast.is_destructive() {
            eprintln!("✗ {}", toast.title);
        } else {
            println!("✓ {}", toast.title);
        }
    }
}
