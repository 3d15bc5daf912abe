// SPDX-License-Identifier: MPL-2.0
//! The fixed set of site locales.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported site locale.
///
/// The set is closed: any other code is rejected when parsed, so a `Locale`
/// value is always a member of the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Catalan, the site's home language.
    #[default]
    Ca,
    Es,
    Fr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Ca, Locale::Es, Locale::Fr, Locale::En];

    /// Lowercase code used in catalog paths, URLs and the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ca => "ca",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Short label shown in the language selector.
    #[must_use]
    pub fn display_code(self) -> &'static str {
        match self {
            Locale::Ca => "CA",
            Locale::Es => "ES",
            Locale::Fr => "FR",
            Locale::En => "EN",
        }
    }

    /// Maps a client language tag such as `fr-CA` to a locale using only its
    /// primary subtag. Returns `None` for malformed or unsupported tags.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        // POSIX locales come as `fr_FR.UTF-8`
        let tag = tag.split('.').next().unwrap_or(tag).replace('_', "-");
        let langid: LanguageIdentifier = tag.parse().ok()?;
        langid.language.as_str().parse().ok()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ca" => Ok(Locale::Ca),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            other => Err(Error::LocaleUnsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reads the host's preferred language tag, the native counterpart of the
/// browser's reported language.
#[must_use]
pub fn client_language() -> Option<String> {
    sys_locale::get_locale()
}
