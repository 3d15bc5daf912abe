// SPDX-License-Identifier: MPL-2.0
//! Top-level page events consumed by `Site::update`.

use crate::dom::NodeId;
use crate::ui::notifications;
use std::time::Instant;

/// Events forwarded from the page. The variants carry the element the event
/// targeted; `Site` routes them to the behavior owning that element.
#[derive(Debug, Clone)]
pub enum Message {
    /// A click on `target` (or one of its descendants).
    Click(NodeId),
    /// A form was submitted.
    Submit(NodeId),
    /// The value of a form control changed.
    Input(NodeId),
    /// The window scrolled to this vertical offset.
    Scroll(f64),
    /// `target` is now `ratio` visible in the viewport.
    Intersect { target: NodeId, ratio: f32 },
    /// Switch to the locale with this code.
    ChangeLanguage(String),
    /// Open or close the newsletter modal.
    ToggleNewsletter,
    /// Scroll the section with this id into view.
    ScrollToSection(String),
    /// A toast was dismissed before it expired.
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving timers and animations.
    Tick(Instant),
}
