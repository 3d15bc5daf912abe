// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::defaults::{NOTIFICATION_EXIT_TRANSITION, NOTIFICATION_LIFETIME};
use crate::i18n::Translations;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast's CSS class and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Validation or submission error (red).
    Error,
}

impl Severity {
    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Info => "#3b82f6",
            Severity::Warning => "#f59e0b",
            Severity::Error => "#ef4444",
        }
    }

    /// Returns the CSS class paired with `notification` on the toast.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Where a toast is in its lifetime at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen.
    Shown,
    /// Sliding out.
    Leaving,
    /// Gone; can be removed.
    Expired,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Text shown when the key has no translation.
    fallback: String,
    /// Values substituted for `{name}` placeholders.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// `fallback` is displayed when the active catalog has no entry for
    /// `message_key`.
    pub fn new(
        severity: Severity,
        message_key: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            fallback: fallback.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key, fallback)
    }

    pub fn info(message_key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key, fallback)
    }

    pub fn warning(message_key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key, fallback)
    }

    pub fn error(message_key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key, fallback)
    }

    /// Adds an argument for `{key}` interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the creation instant.
    #[must_use]
    pub fn created(mut self, at: Instant) -> Self {
        self.created_at = at;
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
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Resolves the message against `translations` and fills in arguments.
    #[must_use]
    pub fn text(&self, translations: &Translations) -> String {
        let template = translations
            .get(&self.message_key)
            .unwrap_or(&self.fallback);
        self.message_args
            .iter()
            .fold(template.to_string(), |text, (key, value)| {
                text.replace(&format!("{{{key}}}"), value)
            })
    }

    /// Returns the lifetime phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        if age < NOTIFICATION_LIFETIME {
            Phase::Shown
        } else if age < NOTIFICATION_LIFETIME + NOTIFICATION_EXIT_TRANSITION {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }

    /// Total time from creation to removal.
    #[must_use]
    pub fn total_lifetime() -> Duration {
        NOTIFICATION_LIFETIME + NOTIFICATION_EXIT_TRANSITION
    }
}
