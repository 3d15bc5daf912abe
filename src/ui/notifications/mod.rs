// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm form submissions or report
//! validation errors without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the lifecycle of the visible toast
//! - [`toast`] - Rendering of the toast element into the page
//!
//! # Design Considerations
//!
//! - One toast at a time: a new notification replaces the current one
//! - Toast duration: 5s for every severity, then a 300ms slide-out
//! - Position: top-right corner

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, Transition};
pub use notification::{Notification, NotificationId, Phase, Severity};
