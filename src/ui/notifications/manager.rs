// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` tracks the toast on screen. The site shows one toast at a
//! time: pushing a new notification replaces the current one.

use super::notification::{Notification, NotificationId, Phase, Severity};
use std::time::Instant;

/// Messages for notification state changes. Expiry is driven by
/// [`Manager::tick`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// What a tick changed about the current toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The toast started sliding out.
    Leaving(NotificationId),
    /// The toast expired and was removed.
    Removed(NotificationId),
}

/// Manages the visible notification.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
    leaving: bool,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, returning the one it replaced.
    ///
    /// Errors and warnings are also logged.
    pub fn push(&mut self, notification: Notification) -> Option<Notification> {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!("Notification: {}", notification.message_key());
            }
            Severity::Error => {
                tracing::error!("Notification: {}", notification.message_key());
            }
            Severity::Success | Severity::Info => {
                tracing::debug!("Notification: {}", notification.message_key());
            }
        }
        self.leaving = false;
        self.current.replace(notification)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was on screen and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            self.leaving = false;
            return true;
        }
        false
    }

    /// Advances the current toast's lifetime to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let notification = self.current.as_ref()?;
        let id = notification.id();
        match notification.phase_at(now) {
            Phase::Shown => None,
            Phase::Leaving if self.leaving => None,
            Phase::Leaving => {
                self.leaving = true;
                Some(Transition::Leaving(id))
            }
            Phase::Expired => {
                self.current = None;
                self.leaving = false;
                Some(Transition::Removed(id))
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) -> Option<Transition> {
        match message {
            Message::Dismiss(id) => self.dismiss(*id).then_some(Transition::Removed(*id)),
        }
    }

    /// Returns the notification on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.leaving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert!(manager.current().is_none());
    }

    #[test]
    fn push_replaces_current_notification() {
        let mut manager = Manager::new();
        let first = Notification::success("first", "First");
        let first_id = first.id();

        assert!(manager.push(first).is_none());
        let replaced = manager.push(Notification::error("second", "Second"));

        assert_eq!(replaced.map(|n| n.id()), Some(first_id));
        assert_eq!(manager.current().map(Notification::message_key), Some("second"));
    }

    #[test]
    fn dismiss_removes_matching_notification_only() {
        let mut manager = Manager::new();
        let notification = Notification::success("test", "Test");
        let id = notification.id();
        manager.push(notification);

        let stranger = Notification::success("other", "Other").id();
        assert!(!manager.dismiss(stranger));
        assert!(manager.dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_reports_leaving_once_then_removal() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let notification = Notification::error("err", "Err").created(start);
        let id = notification.id();
        manager.push(notification);

        assert_eq!(manager.tick(start + Duration::from_secs(1)), None);
        assert_eq!(
            manager.tick(start + Duration::from_millis(5100)),
            Some(Transition::Leaving(id))
        );
        assert_eq!(manager.tick(start + Duration::from_millis(5200)), None);
        assert_eq!(
            manager.tick(start + Duration::from_millis(5400)),
            Some(Transition::Removed(id))
        );
        assert!(!manager.has_notifications());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test", "Test");
        let id = notification.id();
        manager.push(notification);

        assert_eq!(
            manager.handle_message(&Message::Dismiss(id)),
            Some(Transition::Removed(id))
        );
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        manager.push(Notification::info("a", "A"));
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
