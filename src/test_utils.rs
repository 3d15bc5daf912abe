// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.

use crate::error::{Error, Result};
use crate::i18n::{Catalog, CatalogSource, Locale};
use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory catalog source that records every fetch.
///
/// Locales without a registered document fail like an HTTP 404; documents
/// that are not valid JSON fail like a malformed response.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    documents: HashMap<Locale, String>,
    fetches: Arc<Mutex<Vec<Locale>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(mut self, locale: Locale, json: &str) -> Self {
        self.documents.insert(locale, json.to_string());
        self
    }

    /// Locales requested so far, in order.
    pub fn fetches(&self) -> Vec<Locale> {
        self.fetches.lock().unwrap().clone()
    }
}

impl CatalogSource for MockSource {
    async fn fetch(&self, locale: Locale) -> Result<Catalog> {
        self.fetches.lock().unwrap().push(locale);
        let document = self
            .documents
            .get(&locale)
            .ok_or_else(|| Error::catalog_unavailable(locale.code(), "HTTP error! status: 404"))?;
        Catalog::from_json(document).map_err(|e| Error::catalog_unavailable(locale.code(), e))
    }
}

/// Store that reads nothing back and refuses every write, like a browser
/// with storage disabled.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage(format!("cannot write '{key}': storage is read-only")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Err(Error::Storage(format!("cannot remove '{key}': storage is read-only")))
    }
}
