//! Transient user notifications.

use avalplay_core::{Notification, NotificationLevel};

use crate::commands::{print_error, print_success};

/// Sink for success/error messages shown to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

/// Prints notifications to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => print_success(&notification.message),
            NotificationLevel::Error => print_error(&notification.message),
        }
    }
}
