// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, message key and interpolation arguments.

use crate::error::ApiError;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level drives the accent color, the glyph and the display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Single character shown at the left of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// `None` means the toast stays until the user dismisses it.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A message waiting to be rendered as a toast.
///
/// The text is stored as an i18n key and resolved at render time, so a
/// language switch also translates toasts that are already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    detail_key: Option<String>,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            detail_key: None,
            shown_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// A backend failure: `context_key` says what was attempted, the
    /// error's own key becomes the second line.
    pub fn api_failure(
        severity: Severity,
        context_key: impl Into<String>,
        error: &ApiError,
    ) -> Self {
        let notification = Self::new(severity, context_key).with_detail(error.i18n_key());
        match error {
            ApiError::Status(code) => notification.with_arg("status", code.to_string()),
            _ => notification,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail_key: impl Into<String>) -> Self {
        self.detail_key = Some(detail_key.into());
        self
    }

    /// Adds a Fluent argument (`{ $key }`) for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn detail_key(&self) -> Option<&str> {
        self.detail_key.as_deref()
    }

    /// Two notifications are duplicates when they would render the same text.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.severity == other.severity
            && self.message_key == other.message_key
            && self.message_args == other.message_args
            && self.detail_key == other.detail_key
    }

    /// Restarts the auto-dismiss timer.
    pub(super) fn touch(&mut self) {
        self.shown_at = Instant::now();
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.shown_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("error-api-network");
        let much_later = Instant::now() + Duration::from_secs(3600);
        assert!(!notification.is_expired_at(much_later));
    }

    #[test]
    fn warnings_outlive_info() {
        let info = Severity::Info.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > info);

        let notification = Notification::warning("favorite-toggle-failed");
        assert!(!notification.is_expired_at(Instant::now() + info));
        assert!(notification.is_expired_at(Instant::now() + warning));
    }

    #[test]
    fn same_message_compares_key_args_and_severity() {
        let a = Notification::error("error-api-status").with_arg("status", "500");
        let b = Notification::error("error-api-status").with_arg("status", "500");
        let c = Notification::error("error-api-status").with_arg("status", "404");
        let d = Notification::warning("error-api-status").with_arg("status", "500");
        assert!(a.same_message(&b));
        assert!(!a.same_message(&c));
        assert!(!a.same_message(&d));
    }

    #[test]
    fn api_failure_carries_detail_and_status() {
        let notification = Notification::api_failure(
            Severity::Error,
            "notification-foods-load-failed",
            &ApiError::Status(502),
        );
        assert_eq!(notification.message_key(), "notification-foods-load-failed");
        assert_eq!(notification.detail_key(), Some("error-api-status"));
        assert_eq!(
            notification.message_args(),
            &[("status".to_string(), "502".to_string())]
        );

        let timeout = Notification::api_failure(
            Severity::Error,
            "notification-foods-load-failed",
            &ApiError::Timeout,
        );
        assert_eq!(timeout.detail_key(), Some("error-api-timeout"));
        assert!(timeout.message_args().is_empty());
    }
}
