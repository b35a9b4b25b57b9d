//! Transient user notifications.
//!
//! Every validation rejection and transport outcome surfaces as exactly one
//! `Notice`; notices are fire-and-forget and never persisted.

use console::style;
use parking_lot::Mutex;

/// One transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Sink for transient notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to stderr, leaving stdout for command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(text) => eprintln!("{} {text}", style("ok").green().bold()),
            Notice::Error(text) => eprintln!("{} {text}", style("error").red().bold()),
        }
    }
}

/// Buffers notices in memory for tests and headless embedders.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }

    /// True when any buffered notice contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.notices.lock().iter().any(|n| n.text().contains(needle))
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_buffers_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notice::success("first"));
        notifier.notify(Notice::error("second"));

        let notices = notifier.snapshot();
        assert_eq!(notices.len(), 2);
        assert!(!notices[0].is_error());
        assert!(notices[1].is_error());
        assert!(notifier.saw("second"));
    }

    #[test]
    fn take_drains_the_buffer() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notice::error("gone"));
        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.snapshot().is_empty());
    }
}
