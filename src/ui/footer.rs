// SPDX-License-Identifier: MPL-2.0
//! Copyright line in the footer.

use crate::dom::{Document, Selector};
use chrono::Datelike;

const WRITTEN_YEAR: &str = "2024";

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Replaces the first `2024` in the first `.footer-bottom p` with `year`.
/// Returns whether the footer was found.
pub fn update_copyright<D: Document + ?Sized>(document: &mut D, year: i32) -> bool {
    let selector = Selector::class("footer-bottom");
    let Some(footer) = document.select_first(&selector) else {
        return false;
    };
    let Some(line) = document
        .select_within(footer, &Selector::tag("p"))
        .into_iter()
        .next()
    else {
        return false;
    };
    let text = document.text(line);
    document.set_text(line, &text.replacen(WRITTEN_YEAR, &year.to_string(), 1));
    true
}
