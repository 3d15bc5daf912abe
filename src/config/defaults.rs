// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the site behaviors. Constants are organized by category.
//!
//! # Categories
//!
//! - **Translations**: Catalog location and default locale
//! - **Consent**: Cookie banner timing
//! - **Notifications**: Toast lifetime
//! - **Animations**: Reveal and counter parameters
//! - **Forms**: Donation and message limits

use std::time::Duration;

// ==========================================================================
// Translation Defaults
// ==========================================================================

/// Locale code used when neither a stored preference nor the client language applies.
pub const DEFAULT_LOCALE_CODE: &str = "ca";

/// Directory (relative to the site base path) holding the JSON catalogs.
pub const CATALOG_DIR: &str = "lang";

/// Base path prepended to catalog requests when none is configured.
pub const DEFAULT_BASE_PATH: &str = "";

/// How long a picked language option stays highlighted.
pub const LANGUAGE_FEEDBACK: Duration = Duration::from_millis(500);

// ==========================================================================
// Consent Defaults
// ==========================================================================

/// Delay before the cookie banner appears for undecided visitors.
pub const COOKIE_BANNER_DELAY: Duration = Duration::from_millis(2000);

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a toast stays on screen before sliding out.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);

/// Duration of the slide-out transition before the toast is removed.
pub const NOTIFICATION_EXIT_TRANSITION: Duration = Duration::from_millis(300);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Visible fraction at which a reveal element is shown.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Visible fraction at which a statistics section starts its counters.
pub const STATS_THRESHOLD: f32 = 0.5;

/// Total duration of a counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Interval between two counter frames (roughly 60 fps).
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Scroll offset (in pixels) past which the navbar switches to its solid style.
pub const NAVBAR_SOLID_SCROLL_Y: f64 = 50.0;

/// Delay before a filtered-in scholar card fades in.
pub const FILTER_FADE_IN_DELAY: Duration = Duration::from_millis(50);

/// Delay before a filtered-out scholar card is removed from layout.
pub const FILTER_HIDE_DELAY: Duration = Duration::from_millis(300);

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Smallest accepted donation amount, in euros.
pub const MIN_DONATION_EUR: f64 = 1.0;

/// Delay between the donation confirmation and the checkout redirect.
pub const CHECKOUT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Message length above which the counter turns orange.
pub const MESSAGE_WARNING_LENGTH: usize = 200;

/// Message length above which the counter turns red.
pub const MESSAGE_DANGER_LENGTH: usize = 280;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(REVEAL_THRESHOLD > 0.0);
    assert!(REVEAL_THRESHOLD <= 1.0);
    assert!(STATS_THRESHOLD > 0.0);
    assert!(STATS_THRESHOLD <= 1.0);

    assert!(COUNTER_FRAME.as_millis() > 0);
    assert!(COUNTER_DURATION.as_millis() > COUNTER_FRAME.as_millis());

    assert!(MIN_DONATION_EUR > 0.0);
    assert!(MESSAGE_WARNING_LENGTH < MESSAGE_DANGER_LENGTH);

    assert!(NOTIFICATION_EXIT_TRANSITION.as_millis() < NOTIFICATION_LIFETIME.as_millis());
    assert!(FILTER_FADE_IN_DELAY.as_millis() < FILTER_HIDE_DELAY.as_millis());
};
