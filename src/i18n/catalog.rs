// SPDX-License-Identifier: MPL-2.0
//! Translation catalogs: nested JSON maps addressed by dotted keys.
//!
//! A catalog file looks like:
//!
//! ```json
//! {
//!   "nav": { "home": "Inici", "contact": "Contacte" },
//!   "warning": { "message": "Lloc en construcció" }
//! }
//! ```
//!
//! and `nav.home` addresses the `"Inici"` leaf.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A node of the catalog tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CatalogNode {
    /// A translated string.
    Text(String),
    /// A nested group of keys.
    Map(BTreeMap<String, CatalogNode>),
    /// Any other JSON leaf (number, boolean, array, null). Never rendered.
    Other(serde_json::Value),
}

/// Outcome of walking a key through a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    /// A segment was missing or a non-map value was hit before the last segment.
    NotFound,
    /// The path exists but ends on a group or a non-string leaf.
    NotText,
}

/// The translations of a single locale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    root: BTreeMap<String, CatalogNode>,
}

impl Catalog {
    /// Parses a catalog document. The root must be a JSON object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walks `key` segment by segment from the root.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::NotFound;
        }

        let mut segments = key.split('.');
        let Some(first) = segments.next() else {
            return Lookup::NotFound;
        };
        let Some(mut node) = self.root.get(first) else {
            return Lookup::NotFound;
        };

        for segment in segments {
            let CatalogNode::Map(children) = node else {
                return Lookup::NotFound;
            };
            match children.get(segment) {
                Some(child) => node = child,
                None => return Lookup::NotFound,
            }
        }

        match node {
            CatalogNode::Text(text) => Lookup::Found(text),
            CatalogNode::Map(_) | CatalogNode::Other(_) => Lookup::NotText,
        }
    }

    /// Returns the translation for `key`, or `None` when it does not resolve
    /// to a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.lookup(key) {
            Lookup::Found(text) => Some(text),
            Lookup::NotFound | Lookup::NotText => None,
        }
    }

    /// Returns the translation for `key`, or `key` itself when unresolved.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
