// src/status.rs
//! Transient status messages shown while a résumé is uploaded

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

/// Success and info messages disappear after this long
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn auto_hide(&self) -> Option<Duration> {
        match self {
            Self::Info | Self::Success => Some(AUTO_HIDE_AFTER),
            Self::Error => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.kind.auto_hide() {
            Some(ttl) => now.saturating_duration_since(self.shown_at) < ttl,
            None => true,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, kind: MessageKind);
}

fn log_message(message: &str, kind: MessageKind) {
    info!("[{}] {}", kind.as_str().to_uppercase(), message);
}

/// Holds the single message currently on display. A new message replaces the
/// previous one.
#[derive(Debug, Default)]
pub struct StatusBoard {
    current: Mutex<Option<StatusMessage>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message still on display, if any
    pub fn current(&self) -> Option<StatusMessage> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<StatusMessage> {
        let guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().filter(|m| m.is_visible_at(now)).cloned()
    }

    /// Last message shown, visible or not
    pub fn last(&self) -> Option<StatusMessage> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for StatusBoard {
    fn show(&self, message: &str, kind: MessageKind) {
        log_message(message, kind);
        let mut guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(StatusMessage {
            text: message.to_string(),
            kind,
            shown_at: Instant::now(),
        });
    }
}

/// Used when there is no message container: errors and successes go to
/// stderr, info only reaches the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(message: &str, kind: MessageKind) -> Option<String> {
        match kind {
            MessageKind::Error => Some(format!("Error: {}", message)),
            MessageKind::Success => Some(format!("Success: {}", message)),
            MessageKind::Info => None,
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str, kind: MessageKind) {
        log_message(message, kind);
        if let Some(line) = Self::render(message, kind) {
            eprintln!("{}", line);
        }
    }
}
