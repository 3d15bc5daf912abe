// SPDX-License-Identifier: MPL-2.0
//! Site root state and orchestration between the page behaviors.
//!
//! The `Site` struct wires together the translation resolver, the visitor's
//! stored preferences and every page behavior, and translates page events
//! into DOM updates. Timed effects are queued on a schedule and run from
//! `Message::Tick`, so the owner of the event loop controls the clock.

mod message;
mod update;

pub use message::Message;

use crate::config::defaults::COOKIE_BANNER_DELAY;
use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::forms::{
    CharCounter, Checkout, ContactForm, DonationForm, NewsletterForm, NewsletterModal,
};
use crate::i18n::{CatalogSource, ConfiguredSource, Locale, Resolver, Translations};
use crate::storage::KeyValueStore;
use crate::ui::consent::{self, Banner, Consent};
use crate::ui::counter::{CounterAnimation, StatsObserver};
use crate::ui::filters::{CardEffect, Pagination, ScholarFilters};
use crate::ui::footer;
use crate::ui::language_menu::LanguageMenu;
use crate::ui::navigation::MobileMenu;
use crate::ui::notifications::{self, toast, Notification};
use crate::ui::reveal::RevealObserver;
use crate::ui::schedule::Schedule;
use std::fmt;
use std::time::{Duration, Instant};

/// Effects that run once their delay has elapsed.
#[derive(Debug, Clone, Copy)]
enum Deferred {
    RevealBanner,
    ClearLanguageFeedback(NodeId),
    Card(CardEffect),
    Checkout(Checkout),
}

/// Elements the behaviors are attached to, looked up once at start.
#[derive(Debug, Default)]
struct Handles {
    banner: Option<Banner>,
    language_menu: Option<LanguageMenu>,
    mobile_menu: Option<MobileMenu>,
    newsletter_modal: Option<NewsletterModal>,
    newsletter_form: Option<NewsletterForm>,
    contact_form: Option<ContactForm>,
    donation_form: Option<DonationForm>,
    char_counter: Option<CharCounter>,
    filters: Option<ScholarFilters>,
    pagination: Option<Pagination>,
}

impl Handles {
    fn find<D: Document + ?Sized>(document: &D) -> Self {
        Self {
            banner: Banner::find(document),
            language_menu: LanguageMenu::find(document),
            mobile_menu: MobileMenu::find(document),
            newsletter_modal: NewsletterModal::find(document),
            newsletter_form: NewsletterForm::find(document),
            contact_form: ContactForm::find(document),
            donation_form: DonationForm::find(document),
            char_counter: CharCounter::find(document),
            filters: ScholarFilters::find(document),
            pagination: Pagination::find(document),
        }
    }
}

/// Root state of one rendered page.
pub struct Site<S, K, D> {
    resolver: Resolver<S>,
    store: K,
    document: D,
    handles: Handles,
    notifications: notifications::Manager,
    schedule: Schedule<Deferred>,
    reveal: RevealObserver,
    stats: StatsObserver,
    counters: Vec<CounterAnimation>,
    /// Latest instant reported by the owner; timers are measured from it.
    clock: Instant,
}

impl<S, K, D> fmt::Debug for Site<S, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("resolver", &self.resolver)
            .field("handles", &self.handles)
            .field("pending", &self.schedule.len())
            .field("counters", &self.counters.len())
            .finish_non_exhaustive()
    }
}

impl<K, D> Site<ConfiguredSource, K, D>
where
    K: KeyValueStore,
    D: Document,
{
    /// Builds a site whose catalogs come from the configured source.
    pub fn from_config(config: &Config, store: K, document: D) -> Self {
        let source = ConfiguredSource::from_config(config);
        let resolver = Resolver::new(source, config.default_locale());
        Self::new(resolver, store, document)
    }
}

impl<S, K, D> Site<S, K, D>
where
    S: CatalogSource,
    K: KeyValueStore,
    D: Document,
{
    pub fn new(resolver: Resolver<S>, store: K, document: D) -> Self {
        Self {
            resolver,
            store,
            handles: Handles::default(),
            notifications: notifications::Manager::new(),
            schedule: Schedule::new(),
            reveal: RevealObserver::default(),
            stats: StatsObserver::default(),
            counters: Vec::new(),
            clock: Instant::now(),
            document,
        }
    }

    /// Initializes the page: translations, consent, animations, footer.
    ///
    /// `client_language` is the visitor's preferred language tag, when known.
    pub async fn start(&mut self, client_language: Option<&str>, now: Instant) -> Locale {
        self.clock = now;
        self.handles = Handles::find(&self.document);

        let locale = self
            .resolver
            .initialize(&self.store, client_language, &mut self.document)
            .await;

        if consent::restore(&self.store) == Consent::Undecided && self.handles.banner.is_some() {
            self.defer(COOKIE_BANNER_DELAY, Deferred::RevealBanner);
        }

        self.reveal = RevealObserver::observe(&mut self.document);
        self.stats = StatsObserver::observe(&self.document);

        if let Some(counter) = self.handles.char_counter {
            counter.init(&mut self.document);
        }
        footer::update_copyright(&mut self.document, footer::current_year());

        tracing::info!("Site initialized in {}", locale);
        locale
    }

    /// Shows `notification`, replacing the current toast.
    pub fn notify(&mut self, notification: Notification) {
        let notification = notification.created(self.clock);
        toast::render(&notification, self.resolver.translations(), &mut self.document);
        self.notifications.push(notification);
    }

    fn defer(&mut self, delay: Duration, action: Deferred) {
        self.schedule.after(self.clock, delay, action);
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    #[must_use]
    pub fn translations(&self) -> &Translations {
        self.resolver.translations()
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Whether timers or animations are still waiting on ticks.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.schedule.is_empty()
            || !self.counters.is_empty()
            || self.notifications.has_notifications()
    }

    /// Earliest instant a queued effect becomes due.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.next_due()
    }

    pub fn into_parts(self) -> (Resolver<S>, K, D) {
        (self.resolver, self.store, self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, Page, Selector};
    use crate::storage::{MemoryStore, COOKIES_ACCEPTED_KEY, PREFERRED_LANG_KEY};
    use crate::test_utils::{MockSource, ReadOnlyStore};
    use crate::ui::notifications::{NotificationMessage, Severity};

    const CA: &str = r#"{"nav":{"home":"Inici"},"notifications":{"pageLoading":"Carregant la pàgina {page}..."}}"#;
    const FR: &str = r#"{"nav":{"home":"Accueil"}}"#;

    struct Fixture {
        page: Page,
        home: NodeId,
        toggle: NodeId,
        french: NodeId,
        banner: NodeId,
        accept: NodeId,
        filter_poets: NodeId,
        painter: NodeId,
        page_two: NodeId,
    }

    fn fixture() -> Fixture {
        let mut page = Page::new();
        let home = page.append_to_body(Element::new("a").with_attr("data-i18n", "nav.home"));
        let toggle = page.append_to_body(Element::new("button").with_id("languageToggle"));
        let dropdown = page.append_to_body(Element::new("div").with_id("languageDropdown"));
        let french = page.append(
            dropdown,
            Element::new("a")
                .with_class("lang-option")
                .with_attr("data-lang", "fr"),
        );
        let banner = page.append_to_body(Element::new("div").with_id("cookieBanner"));
        let accept = page.append(banner, Element::new("button").with_id("acceptCookies"));
        page.append(banner, Element::new("button").with_id("rejectCookies"));
        page.append_to_body(
            Element::new("button")
                .with_class("filter-btn")
                .with_attr("data-category", "all"),
        );
        let filter_poets = page.append_to_body(
            Element::new("button")
                .with_class("filter-btn")
                .with_attr("data-category", "poet"),
        );
        page.append_to_body(
            Element::new("div")
                .with_class("scholar-card")
                .with_attr("data-category", "poet"),
        );
        let painter = page.append_to_body(
            Element::new("div")
                .with_class("scholar-card")
                .with_attr("data-category", "painter"),
        );
        let page_two = page.append_to_body(
            Element::new("button").with_class("pagination-btn").with_text("2"),
        );
        Fixture {
            page,
            home,
            toggle,
            french,
            banner,
            accept,
            filter_poets,
            painter,
            page_two,
        }
    }

    fn site(page: Page, store: MemoryStore) -> Site<MockSource, MemoryStore, Page> {
        let source = MockSource::new()
            .with_catalog(Locale::Ca, CA)
            .with_catalog(Locale::Fr, FR);
        Site::new(Resolver::new(source, Locale::Ca), store, page)
    }

    #[tokio::test]
    async fn start_translates_page_and_delays_banner() {
        let fx = fixture();
        let mut site = site(fx.page, MemoryStore::new());
        let start = Instant::now();

        assert_eq!(site.start(None, start).await, Locale::Ca);
        assert_eq!(site.document().text(fx.home), "Inici");
        assert!(!site.document().has_class(fx.banner, "show"));

        site.update(Message::Tick(start + Duration::from_millis(1999))).await;
        assert!(!site.document().has_class(fx.banner, "show"));

        site.update(Message::Tick(start + COOKIE_BANNER_DELAY)).await;
        assert!(site.document().has_class(fx.banner, "show"));

        site.update(Message::Click(fx.accept)).await;
        assert!(!site.document().has_class(fx.banner, "show"));
        assert_eq!(site.store().get(COOKIES_ACCEPTED_KEY).as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn decided_visitor_never_sees_banner() {
        let fx = fixture();
        let store = MemoryStore::with_entries([(COOKIES_ACCEPTED_KEY, "false")]);
        let mut site = site(fx.page, store);
        let start = Instant::now();
        site.start(None, start).await;

        site.update(Message::Tick(start + Duration::from_secs(3))).await;
        assert!(!site.document().has_class(fx.banner, "show"));
    }

    #[tokio::test]
    async fn language_option_click_switches_and_persists() {
        let fx = fixture();
        let mut site = site(fx.page, MemoryStore::new());
        let start = Instant::now();
        site.start(None, start).await;
        let mut events = site.resolver().subscribe();

        site.update(Message::Click(fx.toggle)).await;
        site.update(Message::Click(fx.french)).await;

        assert_eq!(site.document().text(fx.home), "Accueil");
        assert_eq!(site.store().get(PREFERRED_LANG_KEY).as_deref(), Some("fr"));
        assert_eq!(events.try_recv().map(|e| e.locale).ok(), Some(Locale::Fr));
        assert!(site.document().style(fx.french, "background-color").is_some());

        site.update(Message::Tick(start + Duration::from_millis(600))).await;
        assert_eq!(site.document().style(fx.french, "background-color"), None);
    }

    #[tokio::test]
    async fn filter_click_hides_other_cards_after_delay() {
        let fx = fixture();
        let mut site = site(fx.page, MemoryStore::new());
        let start = Instant::now();
        site.start(None, start).await;

        site.update(Message::Click(fx.filter_poets)).await;
        assert_eq!(site.document().style(fx.painter, "opacity").as_deref(), Some("0"));
        assert_eq!(site.document().style(fx.painter, "display"), None);

        site.update(Message::Tick(start + Duration::from_millis(300))).await;
        assert_eq!(
            site.document().style(fx.painter, "display").as_deref(),
            Some("none")
        );
    }

    #[tokio::test]
    async fn pagination_toast_is_translated_and_expires() {
        let fx = fixture();
        let mut site = site(fx.page, MemoryStore::new());
        let start = Instant::now();
        site.start(None, start).await;

        site.update(Message::Click(fx.page_two)).await;

        let toasts = site.document().select(&Selector::class("notification"));
        assert_eq!(toasts.len(), 1);
        assert_eq!(site.document().text(toasts[0]), "Carregant la pàgina 2...");
        assert_eq!(
            site.notifications().current().map(|n| n.severity()),
            Some(Severity::Info)
        );

        site.update(Message::Tick(start + Duration::from_millis(5400))).await;
        assert!(site.document().select(&Selector::class("notification")).is_empty());
        assert!(!site.notifications().has_notifications());
    }

    #[tokio::test]
    async fn unsaved_consent_closes_banner_and_reports_storage_error() {
        let fx = fixture();
        let source = MockSource::new().with_catalog(Locale::Ca, CA);
        let mut site = Site::new(Resolver::new(source, Locale::Ca), ReadOnlyStore, fx.page);
        let start = Instant::now();
        site.start(None, start).await;
        site.update(Message::Tick(start + COOKIE_BANNER_DELAY)).await;
        assert!(site.document().has_class(fx.banner, "show"));

        site.update(Message::Click(fx.accept)).await;

        assert!(!site.document().has_class(fx.banner, "show"));
        let current = site.notifications().current().expect("error toast shown");
        assert_eq!(current.severity(), Severity::Error);
        assert_eq!(current.message_key(), "error.storage");
        let toasts = site.document().select(&Selector::class("notification"));
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            site.document().text(toasts[0]),
            "Impossible d'enregistrer votre préférence"
        );
    }

    #[tokio::test]
    async fn dismissed_toast_leaves_the_page_before_expiry() {
        let fx = fixture();
        let mut site = site(fx.page, MemoryStore::new());
        site.start(None, Instant::now()).await;
        site.update(Message::Click(fx.page_two)).await;
        let id = site
            .notifications()
            .current()
            .map(|n| n.id())
            .expect("pagination toast shown");

        site.update(Message::Notification(NotificationMessage::Dismiss(id)))
            .await;

        assert!(!site.notifications().has_notifications());
        assert!(site.document().select(&Selector::class("notification")).is_empty());
    }
}
