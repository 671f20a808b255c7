//! User-facing error notification.
//!
//! The host decides how errors reach the user (a dialog, a status bar, stderr).
//! Components that must report without failing their caller take a [`Notifier`].

use crate::core::output::print_error;
use std::sync::Mutex;

pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Prints through the shared CLI error formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        print_error(&format!("Tortoise: {message}"));
    }
}

/// Keeps every message, for hosts that batch reports and for tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
