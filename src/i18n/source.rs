// SPDX-License-Identifier: MPL-2.0
//! Where catalogs come from.
//!
//! The resolver only needs "give me the catalog for this locale"; the site
//! serves them over HTTP at `<base>/lang/<locale>.json`, local checkouts read
//! them from disk, and a copy is bundled into the binary.

use super::catalog::Catalog;
use super::locale::Locale;
use crate::config::defaults::CATALOG_DIR;
use crate::config::Config;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::future::Future;
use std::path::PathBuf;

/// Fetches the translation catalog of a locale.
///
/// Any failure (transport, non-success status, malformed document) is
/// reported as [`Error::CatalogUnavailable`].
pub trait CatalogSource {
    fn fetch(&self, locale: Locale) -> impl Future<Output = Result<Catalog>> + Send;
}

/// Fetches catalogs over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns the URL of the catalog for `locale`.
    #[must_use]
    pub fn catalog_url(&self, locale: Locale) -> String {
        catalog_path(&self.base_url, locale)
    }
}

impl CatalogSource for HttpSource {
    async fn fetch(&self, locale: Locale) -> Result<Catalog> {
        let url = self.catalog_url(locale);
        tracing::debug!("Fetching catalog {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::catalog_unavailable(locale.code(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::catalog_unavailable(
                locale.code(),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::catalog_unavailable(locale.code(), e))?;
        Catalog::from_slice(&body).map_err(|e| Error::catalog_unavailable(locale.code(), e))
    }
}

/// Reads `<dir>/<locale>.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CatalogSource for DirSource {
    async fn fetch(&self, locale: Locale) -> Result<Catalog> {
        let path = self.dir.join(format!("{}.json", locale.code()));
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::catalog_unavailable(locale.code(), e))?;
        Catalog::from_slice(&bytes).map_err(|e| Error::catalog_unavailable(locale.code(), e))
    }
}

#[derive(RustEmbed)]
#[folder = "assets/lang/"]
struct Asset;

/// Serves the catalogs bundled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    async fn fetch(&self, locale: Locale) -> Result<Catalog> {
        let filename = format!("{}.json", locale.code());
        let file = Asset::get(&filename)
            .ok_or_else(|| Error::catalog_unavailable(locale.code(), "not bundled"))?;
        Catalog::from_slice(file.data.as_ref())
            .map_err(|e| Error::catalog_unavailable(locale.code(), e))
    }
}

/// The source picked from the site configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpSource),
    Dir(DirSource),
    Embedded(EmbeddedSource),
}

impl ConfiguredSource {
    /// A catalog directory wins over a base URL; with neither, the bundled
    /// catalogs are used.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        if let Some(dir) = &config.catalog_dir {
            ConfiguredSource::Dir(DirSource::new(dir))
        } else if config.base_url.is_some() {
            ConfiguredSource::Http(HttpSource::new(config.base_path()))
        } else {
            ConfiguredSource::Embedded(EmbeddedSource)
        }
    }
}

impl CatalogSource for ConfiguredSource {
    async fn fetch(&self, locale: Locale) -> Result<Catalog> {
        match self {
            ConfiguredSource::Http(source) => source.fetch(locale).await,
            ConfiguredSource::Dir(source) => source.fetch(locale).await,
            ConfiguredSource::Embedded(source) => source.fetch(locale).await,
        }
    }
}

/// Builds `<base>/lang/<code>.json`; an empty base yields a relative path.
#[must_use]
pub fn catalog_path(base: &str, locale: Locale) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        format!("{CATALOG_DIR}/{}.json", locale.code())
    } else {
        format!("{base}/{CATALOG_DIR}/{}.json", locale.code())
    }
}
