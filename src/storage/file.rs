// SPDX-License-Identifier: MPL-2.0
//! CBOR-backed preference storage.
//!
//! Entries are kept in memory and written through to `storage.cbor` on every
//! change, so a crash never loses an acknowledged write.

use super::paths;
use super::KeyValueStore;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// A [`KeyValueStore`] persisted to disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// A missing file yields an empty store. A corrupt file is logged and
    /// replaced on the next write.
    pub fn open() -> Result<Self> {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or the default data directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))?;
        Self::open_at(dir.join(STORAGE_FILE))
    }

    /// Opens the store backed by the file at `path`.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("Discarding unreadable storage {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.entries, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(ciborium::from_reader(reader)?)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
