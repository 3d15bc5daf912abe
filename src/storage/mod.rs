// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value storage for visitor preferences.
//!
//! The site keeps two flat string entries across visits: the preferred
//! language and the cookie consent decision. [`KeyValueStore`] abstracts the
//! browser's local storage; [`MemoryStore`] keeps entries for one session and
//! [`FileStore`] persists them as a CBOR map in the application data
//! directory.

mod file;
mod paths;

pub use file::FileStore;
pub use paths::{get_app_data_dir, get_app_data_dir_with_override, ENV_DATA_DIR};

use crate::error::Result;
use std::collections::BTreeMap;

/// Key holding the visitor's chosen locale code.
pub const PREFERRED_LANG_KEY: &str = "preferredLang";

/// Key holding `"true"` or `"false"` once the visitor answered the cookie banner.
pub const COOKIES_ACCEPTED_KEY: &str = "cookiesAccepted";

/// Flat string key-value storage scoped to the site.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Session-only storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(PREFERRED_LANG_KEY), None);

        store.set(PREFERRED_LANG_KEY, "fr").unwrap();
        assert_eq!(store.get(PREFERRED_LANG_KEY).as_deref(), Some("fr"));

        store.remove(PREFERRED_LANG_KEY).unwrap();
        assert_eq!(store.get(PREFERRED_LANG_KEY), None);
    }

    #[test]
    fn with_entries_prefills_store() {
        let store = MemoryStore::with_entries([(COOKIES_ACCEPTED_KEY, "true")]);
        assert_eq!(store.get(COOKIES_ACCEPTED_KEY).as_deref(), Some("true"));
    }
}
