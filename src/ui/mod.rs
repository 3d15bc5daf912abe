// SPDX-License-Identifier: MPL-2.0
//! Page behaviors and shared UI state.
//!
//! Each behavior finds its elements through [`Document`](crate::dom::Document)
//! and is skipped when they are missing. Behaviors that need time are driven
//! by explicit instants from the owner's tick.
//!
//! # Behaviors
//!
//! - [`consent`] - Cookie banner and stored consent
//! - [`language_menu`] - Language dropdown
//! - [`navigation`] - Mobile menu, anchors, navbar scroll style
//! - [`reveal`] - Cards sliding in when scrolled into view
//! - [`counter`] - Statistic counters
//! - [`filters`] - Scholar directory filters and pagination
//! - [`footer`] - Copyright year
//! - [`notifications`] - Toast notifications for user feedback
//! - [`schedule`] - Deferred actions

pub mod consent;
pub mod counter;
pub mod filters;
pub mod footer;
pub mod language_menu;
pub mod navigation;
pub mod notifications;
pub mod reveal;
pub mod schedule;
