// SPDX-License-Identifier: MPL-2.0
//! Pushes resolved translations into a document.

use super::resolver::Translations;
use crate::dom::{Document, Selector};
use regex::Regex;
use std::sync::OnceLock;

/// Marker attribute whose key translates the element's text.
pub const TEXT_MARKER: &str = "data-i18n";
/// Marker attribute whose key translates the `placeholder` attribute.
pub const PLACEHOLDER_MARKER: &str = "data-i18n-placeholder";
/// Marker attribute whose key translates the `title` attribute.
pub const TITLE_MARKER: &str = "data-i18n-title";

/// Key of the site-wide warning banner.
pub const WARNING_KEY: &str = "warning.message";

const LANGUAGE_TOGGLE_ID: &str = "languageToggle";
const CURRENT_LANG_CLASS: &str = "current-lang";
const WARNING_CLASS: &str = "warning-text";

fn locale_segment() -> &'static Regex {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    SEGMENT.get_or_init(|| Regex::new(r"/[a-z]{2}/").expect("locale segment pattern is valid"))
}

/// Rewrites every translatable part of `document` for the active locale.
///
/// Elements whose key does not resolve, or resolves to an empty string, keep
/// their current content. Missing elements are skipped.
pub fn apply<D: Document + ?Sized>(translations: &Translations, document: &mut D) {
    apply_marker(translations, document, TEXT_MARKER, |doc, node, text| {
        doc.set_text(node, text);
    });
    apply_marker(translations, document, PLACEHOLDER_MARKER, |doc, node, text| {
        doc.set_attribute(node, "placeholder", text);
    });
    apply_marker(translations, document, TITLE_MARKER, |doc, node, text| {
        doc.set_attribute(node, "title", text);
    });

    document.set_language(translations.locale().code());
    update_language_label(translations, document);
    update_warning_text(translations, document);
    update_alternate_links(translations, document);
}

fn apply_marker<D, F>(translations: &Translations, document: &mut D, marker: &str, mut write: F)
where
    D: Document + ?Sized,
    F: FnMut(&mut D, crate::dom::NodeId, &str),
{
    for node in document.select(&Selector::attr(marker)) {
        let Some(key) = document.attribute(node, marker) else {
            continue;
        };
        if let Some(text) = translations.get(&key) {
            write(document, node, text);
        }
    }
}

fn update_language_label<D: Document + ?Sized>(translations: &Translations, document: &mut D) {
    let Some(toggle) = document.element_by_id(LANGUAGE_TOGGLE_ID) else {
        return;
    };
    let label = document
        .select_within(toggle, &Selector::class(CURRENT_LANG_CLASS))
        .into_iter()
        .next();
    if let Some(label) = label {
        document.set_text(label, translations.locale().display_code());
    }
}

fn update_warning_text<D: Document + ?Sized>(translations: &Translations, document: &mut D) {
    let Some(banner) = document.select_first(&Selector::class(WARNING_CLASS)) else {
        return;
    };
    if let Some(text) = translations.get(WARNING_KEY) {
        document.set_text(banner, text);
    }
}

fn update_alternate_links<D: Document + ?Sized>(translations: &Translations, document: &mut D) {
    let links = Selector::tag("link").and(Selector::attr_eq("rel", "alternate"));
    let replacement = format!("/{}/", translations.locale().code());
    for link in document.select(&links) {
        let Some(href) = document.attribute(link, "href") else {
            continue;
        };
        let rewritten = locale_segment().replace(&href, replacement.as_str());
        document.set_attribute(link, "href", &rewritten);
    }
}
