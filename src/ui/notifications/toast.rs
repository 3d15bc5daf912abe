// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! A toast is a fixed-position `div.notification.<severity>` appended to
//! `<body>`. It slides in from the right, stays, then slides back out.

use super::notification::Notification;
use crate::dom::{Document, NodeId, Selector};
use crate::i18n::Translations;

const TOAST_CLASS: &str = "notification";
const HIDDEN_TRANSFORM: &str = "translateX(120%)";
const SHOWN_TRANSFORM: &str = "translateX(0)";

/// Fixed styling shared by every toast.
const BASE_STYLE: [(&str, &str); 11] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "15px 20px"),
    ("color", "white"),
    ("border-radius", "8px"),
    ("z-index", "10000"),
    ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)"),
    ("transition", "transform 0.3s ease"),
    ("max-width", "300px"),
    ("font-family", "inherit"),
];

/// Replaces any toast on the page with one for `notification`.
pub fn render<D: Document + ?Sized>(
    notification: &Notification,
    translations: &Translations,
    document: &mut D,
) -> NodeId {
    remove_all(document);

    let body = document.body();
    let toast = document.create_element(body, "div");
    document.set_attribute(
        toast,
        "class",
        &format!("{TOAST_CLASS} {}", notification.severity().class()),
    );
    document.set_text(toast, &notification.text(translations));
    for (property, value) in BASE_STYLE {
        document.set_style(toast, property, value);
    }
    document.set_style(toast, "background", notification.severity().color());
    document.set_style(toast, "transform", SHOWN_TRANSFORM);
    toast
}

/// Starts the exit animation of every toast.
pub fn slide_out<D: Document + ?Sized>(document: &mut D) {
    for toast in document.select(&Selector::class(TOAST_CLASS)) {
        document.set_style(toast, "transform", HIDDEN_TRANSFORM);
    }
}

/// Removes every toast from the page.
pub fn remove_all<D: Document + ?Sized>(document: &mut D) {
    for toast in document.select(&Selector::class(TOAST_CLASS)) {
        document.remove(toast);
    }
}
