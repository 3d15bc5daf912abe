// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    /// The catalog for `locale` could not be fetched or decoded.
    #[error("Catalog for '{locale}' unavailable: {reason}")]
    CatalogUnavailable { locale: String, reason: String },

    /// The requested locale code is not part of the supported set.
    #[error("Unsupported locale: {0}")]
    LocaleUnsupported(String),
}

impl Error {
    pub fn catalog_unavailable(locale: impl Into<String>, reason: impl ToString) -> Self {
        Error::CatalogUnavailable {
            locale: locale.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the i18n key used when this error is surfaced as a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error.io",
            Error::Config(_) => "error.config",
            Error::Storage(_) => "error.storage",
            Error::CatalogUnavailable { .. } => "error.catalog",
            Error::LocaleUnsupported(_) => "error.locale",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
