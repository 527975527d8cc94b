//! Transient notifications shown after an operation

use std::sync::{Arc, Mutex};

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Sink for dashboard notifications
pub trait Notifier {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast {
            kind: ToastKind::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Toast {
            kind: ToastKind::Error,
            message: message.to_string(),
        });
    }
}

/// Prints successes to stdout and errors to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => println!("✔ {}", toast.message),
            ToastKind::Error => eprintln!("✖ {}", toast.message),
        }
    }
}

/// Keeps every notification. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
