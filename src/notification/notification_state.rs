use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);
const ERROR_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// Holds at most one notification; a newer one replaces the older
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Warning, DEFAULT_DURATION);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Error, ERROR_DURATION);
    }

    fn push(&mut self, message: String, level: NotificationLevel, duration: Duration) {
        self.current = Some(Notification {
            message,
            level,
            shown_at: Instant::now(),
            duration,
        });
    }

    /// Current notification, dropping it first if it has expired
    pub fn current(&mut self) -> Option<&Notification> {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
