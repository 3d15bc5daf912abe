// SPDX-License-Identifier: MPL-2.0
//! Field validation shared by the forms.

use crate::dom::{Document, NodeId, Selector};
use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn amount_pattern() -> &'static Regex {
    static AMOUNT: OnceLock<Regex> = OnceLock::new();
    AMOUNT.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("amount pattern is valid")
    })
}

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Reads the leading decimal number of `text`. Trailing characters such as
/// a currency sign are ignored; text without a leading number gives `None`.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let matched = amount_pattern().find(text.trim_start())?;
    matched.as_str().parse().ok()
}

/// Controls marked `required` inside `form`, in document order.
pub fn required_fields<D: Document + ?Sized>(document: &D, form: NodeId) -> Vec<NodeId> {
    document.select_within(form, &Selector::attr("required"))
}

/// Whether a control holds only whitespace.
pub fn is_blank<D: Document + ?Sized>(document: &D, field: NodeId) -> bool {
    document.value(field).trim().is_empty()
}
