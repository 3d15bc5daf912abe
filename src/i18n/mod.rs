// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! Translations are nested JSON catalogs, one per locale, addressed with
//! dotted keys (`nav.home`). The [`Resolver`] picks the visitor's locale,
//! loads its catalog, and rewrites every marked element of the page.
//!
//! # Features
//!
//! - Locale detection from the stored preference, the client language or the default
//! - Catalogs fetched over HTTP, read from disk, or bundled into the binary
//! - Runtime language switching with a `LanguageChanged` broadcast
//! - Single fallback to the default locale when a catalog is unavailable

mod apply;
mod catalog;
mod locale;
mod resolver;
mod source;

pub use apply::{apply, PLACEHOLDER_MARKER, TEXT_MARKER, TITLE_MARKER, WARNING_KEY};
pub use catalog::{Catalog, CatalogNode, Lookup};
pub use locale::{client_language, Locale};
pub use resolver::{initial_locale, LanguageChanged, Resolver, Translations};
pub use source::{
    catalog_path, CatalogSource, ConfiguredSource, DirSource, EmbeddedSource, HttpSource,
};
