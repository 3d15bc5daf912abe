// SPDX-License-Identifier: MPL-2.0
//! Locale state, catalog loading and language switching.

use super::apply::apply;
use super::catalog::Catalog;
use super::locale::Locale;
use super::source::CatalogSource;
use crate::dom::Document;
use crate::error::Result;
use crate::storage::{KeyValueStore, PREFERRED_LANG_KEY};
use tokio::sync::broadcast;

/// Capacity of the language-change channel; slow subscribers skip old events.
const EVENT_CAPACITY: usize = 16;

/// Event broadcast after the active language changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged {
    pub locale: Locale,
}

/// The active locale together with the catalog used to render it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    locale: Locale,
    catalog: Catalog,
    /// Locale the catalog was actually loaded for; `None` until a load succeeds.
    catalog_locale: Option<Locale>,
}

impl Translations {
    pub fn new(locale: Locale, catalog: Catalog, catalog_locale: Option<Locale>) -> Self {
        Self {
            locale,
            catalog,
            catalog_locale,
        }
    }

    /// The active locale, as shown to the visitor.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Locale whose catalog is in use. Differs from [`Self::locale`] after a
    /// fallback load.
    #[must_use]
    pub fn catalog_locale(&self) -> Option<Locale> {
        self.catalog_locale
    }

    /// Returns the translation of `key` when it resolves to a non-empty
    /// string. Empty entries count as untranslated.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.catalog.get(key).filter(|text| !text.is_empty())
    }

    /// Returns the translation of `key`, or `key` itself when unresolved.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.catalog.resolve(key)
    }
}

/// Picks the starting locale: stored preference, then client language, then
/// `default`. Unsupported values at each step are skipped.
#[must_use]
pub fn initial_locale(
    stored: Option<&str>,
    client_language: Option<&str>,
    default: Locale,
) -> Locale {
    if let Some(locale) = stored.and_then(|code| code.parse::<Locale>().ok()) {
        return locale;
    }
    if let Some(locale) = client_language.and_then(Locale::from_language_tag) {
        return locale;
    }
    default
}

/// Owns the translation state of a page.
pub struct Resolver<S> {
    source: S,
    default_locale: Locale,
    translations: Translations,
    events: broadcast::Sender<LanguageChanged>,
}

impl<S: CatalogSource> Resolver<S> {
    pub fn new(source: S, default_locale: Locale) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            source,
            default_locale,
            translations: Translations::new(default_locale, Catalog::default(), None),
            events,
        }
    }

    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.translations.locale
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the translation of `key`, or `key` itself when unresolved.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.translations.resolve(key)
    }

    /// Subscribes to [`LanguageChanged`] events.
    pub fn subscribe(&self) -> broadcast::Receiver<LanguageChanged> {
        self.events.subscribe()
    }

    /// Picks the starting locale, loads its catalog and renders `document`.
    ///
    /// Catalog failures are logged; the page is rendered with whatever
    /// catalog is available.
    pub async fn initialize<K, D>(
        &mut self,
        store: &K,
        client_language: Option<&str>,
        document: &mut D,
    ) -> Locale
    where
        K: KeyValueStore + ?Sized,
        D: Document + ?Sized,
    {
        let stored = store.get(PREFERRED_LANG_KEY);
        let locale = initial_locale(stored.as_deref(), client_language, self.default_locale);
        tracing::debug!(
            "Initial locale {} (stored: {:?}, client: {:?})",
            locale,
            stored,
            client_language
        );

        self.translations.locale = locale;
        // Failure is already logged by load; rendering continues with the last good catalog
        let _ = self.load(locale).await;
        apply(&self.translations, document);
        locale
    }

    /// Loads the catalog of `locale`, falling back once to the default locale.
    ///
    /// Returns the locale whose catalog is now active. On error the previous
    /// catalog is kept.
    pub async fn load(&mut self, locale: Locale) -> Result<Locale> {
        let err = match self.source.fetch(locale).await {
            Ok(catalog) => {
                self.replace_catalog(catalog, locale);
                return Ok(locale);
            }
            Err(err) => err,
        };
        tracing::error!("Error loading translations: {}", err);

        if locale == self.default_locale {
            return Err(err);
        }

        tracing::info!("Fallback to {} translations", self.default_locale);
        match self.source.fetch(self.default_locale).await {
            Ok(catalog) => {
                self.replace_catalog(catalog, self.default_locale);
                tracing::warn!(
                    "Showing {} catalog while locale {} is active",
                    self.default_locale,
                    self.translations.locale
                );
                Ok(self.default_locale)
            }
            Err(fallback_err) => {
                tracing::error!("Fallback translation also failed: {}", fallback_err);
                Err(fallback_err)
            }
        }
    }

    fn replace_catalog(&mut self, catalog: Catalog, loaded_for: Locale) {
        self.translations.catalog = catalog;
        self.translations.catalog_locale = Some(loaded_for);
    }

    /// Switches to the locale named by `code`, persists it, reloads and
    /// re-renders `document`, then broadcasts [`LanguageChanged`].
    ///
    /// Returns `Ok(false)` when `code` is already active, and
    /// [`crate::error::Error::LocaleUnsupported`] without touching any state when it is not
    /// a supported locale.
    pub async fn change_language<K, D>(
        &mut self,
        code: &str,
        store: &mut K,
        document: &mut D,
    ) -> Result<bool>
    where
        K: KeyValueStore + ?Sized,
        D: Document + ?Sized,
    {
        let locale = match code.parse::<Locale>() {
            Ok(locale) => locale,
            Err(err) => {
                tracing::warn!("Unsupported language: {}", code);
                return Err(err);
            }
        };

        if locale == self.translations.locale {
            return Ok(false);
        }

        self.translations.locale = locale;
        if let Err(err) = store.set(PREFERRED_LANG_KEY, locale.code()) {
            tracing::warn!("Failed to persist preferred language: {}", err);
        }
        // Failure is already logged by load; rendering continues with the last good catalog
        let _ = self.load(locale).await;
        apply(&self.translations, document);

        // No subscribers is not an error
        let _ = self.events.send(LanguageChanged { locale });
        tracing::info!("Language changed to: {}", locale);
        Ok(true)
    }
}

impl<S> std::fmt::Debug for Resolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("default_locale", &self.default_locale)
            .field("translations", &self.translations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Page;
    use crate::error::Error;
    use crate::storage::MemoryStore;
    use crate::test_utils::MockSource;

    const FR: &str = r#"{"nav":{"home":"Accueil"}}"#;
    const CA: &str = r#"{"nav":{"home":"Inici"}}"#;
    const ES: &str = r#"{"nav":{"home":"Inicio"}}"#;

    fn resolver(source: MockSource) -> Resolver<MockSource> {
        Resolver::new(source, Locale::Ca)
    }

    // -- initial_locale ---------------------------------------------------

    #[test]
    fn stored_preference_wins() {
        assert_eq!(initial_locale(Some("en"), Some("fr-FR"), Locale::Ca), Locale::En);
    }

    #[test]
    fn client_language_beats_default() {
        assert_eq!(initial_locale(None, Some("fr"), Locale::Ca), Locale::Fr);
    }

    #[test]
    fn unsupported_stored_preference_is_skipped() {
        assert_eq!(initial_locale(Some("xx"), Some("es"), Locale::Ca), Locale::Es);
    }

    #[test]
    fn default_applies_when_nothing_is_supported() {
        assert_eq!(initial_locale(Some("xx"), Some("de-DE"), Locale::Ca), Locale::Ca);
        assert_eq!(initial_locale(None, None, Locale::Fr), Locale::Fr);
    }

    #[test]
    fn precedence_holds_for_every_combination() {
        let stored_values = [None, Some("xx"), Some("es")];
        let client_values = [None, Some("de"), Some("fr-CA")];
        for stored in stored_values {
            for client in client_values {
                let expected = match (stored, client) {
                    (Some("es"), _) => Locale::Es,
                    (_, Some("fr-CA")) => Locale::Fr,
                    _ => Locale::Ca,
                };
                assert_eq!(
                    initial_locale(stored, client, Locale::Ca),
                    expected,
                    "stored {stored:?}, client {client:?}"
                );
            }
        }
    }

    // -- initialize -------------------------------------------------------

    #[tokio::test]
    async fn initialize_uses_client_language_and_loads_catalog() {
        let source = MockSource::new().with_catalog(Locale::Fr, FR);
        let mut resolver = resolver(source);
        let mut page = Page::new();

        let locale = resolver
            .initialize(&MemoryStore::new(), Some("fr"), &mut page)
            .await;

        assert_eq!(locale, Locale::Fr);
        assert_eq!(resolver.resolve("nav.home"), "Accueil");
        assert_eq!(resolver.resolve("nav.missing"), "nav.missing");
        assert_eq!(page.language().as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn initialize_skips_unsupported_stored_preference() {
        let source = MockSource::new().with_catalog(Locale::Es, ES);
        let mut resolver = resolver(source);
        let store = MemoryStore::with_entries([(PREFERRED_LANG_KEY, "xx")]);

        let locale = resolver.initialize(&store, Some("es"), &mut Page::new()).await;

        assert_eq!(locale, Locale::Es);
        assert_eq!(resolver.resolve("nav.home"), "Inicio");
    }

    #[tokio::test]
    async fn initialize_survives_total_failure() {
        let mut resolver = resolver(MockSource::new());
        let mut page = Page::new();

        let locale = resolver.initialize(&MemoryStore::new(), None, &mut page).await;

        assert_eq!(locale, Locale::Ca);
        assert!(resolver.translations().catalog().is_empty());
        assert_eq!(resolver.resolve("nav.home"), "nav.home");
        assert_eq!(page.language().as_deref(), Some("ca"));
    }

    // -- load -------------------------------------------------------------

    #[tokio::test]
    async fn failed_load_falls_back_to_default_once() {
        let source = MockSource::new().with_catalog(Locale::Ca, CA);
        let mut resolver = resolver(source.clone());
        resolver.translations.locale = Locale::En;

        let loaded = resolver.load(Locale::En).await.expect("fallback should succeed");

        assert_eq!(loaded, Locale::Ca);
        assert_eq!(source.fetches(), vec![Locale::En, Locale::Ca]);
        assert_eq!(resolver.locale(), Locale::En);
        assert_eq!(resolver.translations().catalog_locale(), Some(Locale::Ca));
        assert_eq!(resolver.resolve("nav.home"), "Inici");
    }

    #[tokio::test]
    async fn failed_fallback_keeps_previous_catalog() {
        let source = MockSource::new().with_catalog(Locale::Fr, FR);
        let mut resolver = resolver(source.clone());
        resolver.load(Locale::Fr).await.expect("fr should load");

        let err = resolver.load(Locale::En).await.unwrap_err();

        assert!(matches!(err, Error::CatalogUnavailable { .. }));
        assert_eq!(source.fetches(), vec![Locale::Fr, Locale::En, Locale::Ca]);
        assert_eq!(resolver.resolve("nav.home"), "Accueil");
        assert_eq!(resolver.translations().catalog_locale(), Some(Locale::Fr));
    }

    #[tokio::test]
    async fn failed_default_load_does_not_retry() {
        let source = MockSource::new();
        let mut resolver = resolver(source.clone());

        assert!(resolver.load(Locale::Ca).await.is_err());
        assert_eq!(source.fetches(), vec![Locale::Ca]);
    }

    #[tokio::test]
    async fn malformed_catalog_counts_as_failure() {
        let source = MockSource::new()
            .with_catalog(Locale::Es, "{ not json")
            .with_catalog(Locale::Ca, CA);
        let mut resolver = resolver(source.clone());

        assert_eq!(resolver.load(Locale::Es).await.unwrap(), Locale::Ca);
        assert_eq!(resolver.resolve("nav.home"), "Inici");
    }

    // -- change_language --------------------------------------------------

    #[tokio::test]
    async fn change_language_persists_reloads_and_notifies() {
        let source = MockSource::new()
            .with_catalog(Locale::Ca, CA)
            .with_catalog(Locale::Fr, FR);
        let mut resolver = resolver(source);
        let mut store = MemoryStore::new();
        let mut page = Page::new();
        resolver.initialize(&store, None, &mut page).await;
        let mut events = resolver.subscribe();

        let changed = resolver
            .change_language("fr", &mut store, &mut page)
            .await
            .expect("fr is supported");

        assert!(changed);
        assert_eq!(resolver.locale(), Locale::Fr);
        assert_eq!(store.get(PREFERRED_LANG_KEY).as_deref(), Some("fr"));
        assert_eq!(resolver.resolve("nav.home"), "Accueil");
        assert_eq!(page.language().as_deref(), Some("fr"));
        assert_eq!(
            events.try_recv().expect("event should be sent"),
            LanguageChanged { locale: Locale::Fr }
        );
    }

    #[tokio::test]
    async fn change_to_unsupported_locale_changes_nothing() {
        let source = MockSource::new().with_catalog(Locale::Ca, CA);
        let mut resolver = resolver(source.clone());
        let mut store = MemoryStore::new();
        let mut page = Page::new();
        resolver.initialize(&store, None, &mut page).await;
        let mut events = resolver.subscribe();

        let err = resolver
            .change_language("de", &mut store, &mut page)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::LocaleUnsupported(code) if code == "de"));
        assert_eq!(resolver.locale(), Locale::Ca);
        assert_eq!(resolver.resolve("nav.home"), "Inici");
        assert_eq!(source.fetches(), vec![Locale::Ca]);
        assert_eq!(store.get(PREFERRED_LANG_KEY), None);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn change_to_active_locale_is_a_no_op() {
        let source = MockSource::new().with_catalog(Locale::Ca, CA);
        let mut resolver = resolver(source.clone());
        let mut store = MemoryStore::new();
        let mut page = Page::new();
        resolver.initialize(&store, None, &mut page).await;
        let mut events = resolver.subscribe();

        let changed = resolver
            .change_language("ca", &mut store, &mut page)
            .await
            .expect("ca is supported");

        assert!(!changed);
        assert_eq!(source.fetches(), vec![Locale::Ca]);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn fallback_keeps_requested_locale_label() {
        let source = MockSource::new().with_catalog(Locale::Ca, CA);
        let mut resolver = resolver(source.clone());
        let mut store = MemoryStore::new();
        let mut page = Page::new();
        resolver.initialize(&store, None, &mut page).await;

        resolver
            .change_language("en", &mut store, &mut page)
            .await
            .expect("en is supported");

        assert_eq!(source.fetches(), vec![Locale::Ca, Locale::En, Locale::Ca]);
        assert_eq!(resolver.locale(), Locale::En);
        assert_eq!(resolver.translations().catalog_locale(), Some(Locale::Ca));
        assert_eq!(resolver.resolve("nav.home"), "Inici");
        assert_eq!(page.language().as_deref(), Some("en"));
    }
}
