// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration: where translation catalogs
//! are fetched from and which locale is the fallback. Settings live in a
//! `settings.toml` file in the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use candogmatic::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.base_url = Some("https://www.candogmatic.com".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CanDogmatic";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site base URL; catalogs are requested from `<base_url>/lang/<locale>.json`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Fallback locale code. Unsupported values fall back to the built-in default.
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Local directory of `<locale>.json` catalogs, used instead of HTTP when set.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

impl Config {
    /// Returns the configured default locale, or the built-in one.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
            .as_deref()
            .and_then(|code| code.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the base path catalogs are resolved against.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_BASE_PATH)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            base_url: Some("https://example.org".to_string()),
            default_locale: Some("es".to_string()),
            catalog_dir: Some(PathBuf::from("/srv/site/lang")),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.base_url.is_none());
    }

    #[test]
    fn unsupported_default_locale_falls_back_to_catalan() {
        let config = Config {
            default_locale: Some("de".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_locale(), Locale::Ca);
    }

    #[test]
    fn configured_default_locale_is_used() {
        let config = Config {
            default_locale: Some("fr".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_locale(), Locale::Fr);
    }

    #[test]
    fn base_path_defaults_to_relative() {
        assert_eq!(Config::default().base_path(), "");
    }
}
