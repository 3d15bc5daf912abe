// SPDX-License-Identifier: MPL-2.0
//! Update logic and event handlers for the site.
//!
//! `Site::update` is the single entry point for page events. A click may
//! concern several behaviors at once (a menu link is also an anchor), so
//! every behavior gets a chance to react, as independent listeners would.

use super::{Deferred, Message, Site};
use crate::config::defaults::{CHECKOUT_REDIRECT_DELAY, LANGUAGE_FEEDBACK};
use crate::dom::{Document, NodeId, Selector};
use crate::forms::Submission;
use crate::i18n::CatalogSource;
use crate::storage::KeyValueStore;
use crate::ui::language_menu::LanguageMenu;
use crate::ui::navigation;
use crate::ui::notifications::{toast, Notification, Transition};
use std::time::Instant;

impl<S, K, D> Site<S, K, D>
where
    S: CatalogSource,
    K: KeyValueStore,
    D: Document,
{
    pub async fn update(&mut self, message: Message) {
        match message {
            Message::Click(target) => self.handle_click(target).await,
            Message::Submit(form) => self.handle_submit(form),
            Message::Input(control) => self.handle_input(control),
            Message::Scroll(scroll_y) => {
                navigation::update_navbar(&mut self.document, scroll_y);
            }
            Message::Intersect { target, ratio } => self.handle_intersection(target, ratio),
            Message::ChangeLanguage(code) => self.change_language(&code).await,
            Message::ToggleNewsletter => {
                if let Some(modal) = self.handles.newsletter_modal {
                    modal.toggle(&mut self.document);
                }
            }
            Message::ScrollToSection(id) => {
                navigation::scroll_to_section(&mut self.document, &id);
            }
            Message::Notification(message) => {
                if let Some(transition) = self.notifications.handle_message(&message) {
                    self.apply_toast_transition(transition);
                }
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    /// Switches language. Unsupported codes are logged and ignored.
    async fn change_language(&mut self, code: &str) {
        match self
            .resolver
            .change_language(code, &mut self.store, &mut self.document)
            .await
        {
            Ok(true) => {
                if let Some(current) = self.notifications.current() {
                    toast::render(current, self.resolver.translations(), &mut self.document);
                }
            }
            Ok(false) => {}
            Err(err) => tracing::debug!("Language change ignored: {}", err),
        }
    }

    async fn handle_click(&mut self, target: NodeId) {
        if let Some(menu) = self.handles.language_menu {
            if self.document.contains(menu.toggle, target) {
                menu.toggle(&mut self.document);
            } else {
                let option = self
                    .document
                    .closest(target, &Selector::class("lang-option"))
                    .filter(|option| self.document.contains(menu.dropdown, *option));
                if let Some(option) = option {
                    if let Some(code) = menu.pick_option(&mut self.document, option) {
                        self.change_language(&code).await;
                        self.defer(LANGUAGE_FEEDBACK, Deferred::ClearLanguageFeedback(option));
                    }
                }
                menu.click_elsewhere(&mut self.document, target);
            }
        }

        if let Some(banner) = self.handles.banner {
            let answer = if self.document.contains(banner.accept, target) {
                Some(banner.accept(&mut self.document, &mut self.store))
            } else if self.document.contains(banner.reject, target) {
                Some(banner.reject(&mut self.document, &mut self.store))
            } else {
                None
            };
            if let Some(Err(err)) = answer {
                tracing::warn!("Failed to store cookie consent: {}", err);
                self.notify(Notification::error(
                    err.i18n_key(),
                    "Impossible d'enregistrer votre préférence",
                ));
            }
        }

        if let Some(menu) = self.handles.mobile_menu {
            if self.document.contains(menu.hamburger, target) {
                menu.toggle(&mut self.document);
            } else if self
                .document
                .closest(target, &Selector::class("nav-link"))
                .is_some()
            {
                menu.close(&mut self.document);
            }
        }

        let anchor = Selector::tag("a").and(Selector::attr_prefix("href", "#"));
        if let Some(link) = self.document.closest(target, &anchor) {
            if let Some(href) = self.document.attribute(link, "href") {
                navigation::follow_anchor(&mut self.document, &href);
            }
        }

        if let Some(modal) = self.handles.newsletter_modal {
            modal.click(&mut self.document, target);
        }

        self.handle_directory_click(target);
    }

    fn handle_directory_click(&mut self, target: NodeId) {
        let filter_button = self
            .document
            .closest(target, &Selector::class("filter-btn"));
        if let (Some(filters), Some(button)) = (&self.handles.filters, filter_button) {
            if filters.is_button(button) {
                let effects = filters.select(&mut self.document, button);
                // Effects of a previous filter would undo this one
                self.schedule
                    .cancel(|action| matches!(action, Deferred::Card(_)));
                for (delay, effect) in effects {
                    self.defer(delay, Deferred::Card(effect));
                }
            }
        }

        let page_button = self
            .document
            .closest(target, &Selector::class("pagination-btn"));
        if let (Some(pagination), Some(button)) = (&self.handles.pagination, page_button) {
            if pagination.is_button(button) {
                let notification = pagination.select(&mut self.document, button);
                self.notify(notification);
            }
        }
    }

    fn handle_submit(&mut self, form: NodeId) {
        if let Some(newsletter) = self.handles.newsletter_form {
            if newsletter.form == form {
                let modal = self.handles.newsletter_modal;
                let notification = newsletter.submit(&mut self.document, modal);
                self.notify(notification);
                return;
            }
        }

        if let Some(contact) = self.handles.contact_form {
            if contact.form == form {
                let notification = contact.submit(&mut self.document);
                self.notify(notification);
                return;
            }
        }

        if let Some(donation) = self.handles.donation_form {
            if donation.form == form {
                match donation.submit(&mut self.document) {
                    Submission::Incomplete => {}
                    Submission::Rejected(notification) => self.notify(notification),
                    Submission::Accepted {
                        notification,
                        checkout,
                    } => {
                        self.notify(notification);
                        self.defer(CHECKOUT_REDIRECT_DELAY, Deferred::Checkout(checkout));
                    }
                }
                return;
            }
        }

        tracing::debug!("Ignoring submit of unknown form {:?}", form);
    }

    fn handle_input(&mut self, control: NodeId) {
        if let Some(counter) = self.handles.char_counter {
            if counter.message == control {
                counter.update(&mut self.document);
            }
        }
    }

    fn handle_intersection(&mut self, target: NodeId, ratio: f32) {
        self.reveal.intersect(&mut self.document, target, ratio);
        if let Some(animation) = self.stats.intersect(&self.document, target, ratio, self.clock) {
            self.counters.push(animation);
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        self.clock = now;

        for action in self.schedule.drain_due(now) {
            self.run_deferred(action);
        }

        self.counters
            .retain_mut(|animation| !animation.tick(&mut self.document, now));

        if let Some(transition) = self.notifications.tick(now) {
            self.apply_toast_transition(transition);
        }
    }

    fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::RevealBanner => {
                if let Some(banner) = self.handles.banner {
                    banner.reveal_if_undecided(&mut self.document, &self.store);
                }
            }
            Deferred::ClearLanguageFeedback(option) => {
                LanguageMenu::clear_feedback(&mut self.document, option);
            }
            Deferred::Card(effect) => effect.apply(&mut self.document),
            Deferred::Checkout(checkout) => {
                if let Some(donation) = self.handles.donation_form {
                    donation.complete(&mut self.document, checkout, self.handles.char_counter);
                }
            }
        }
    }

    fn apply_toast_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Leaving(_) => toast::slide_out(&mut self.document),
            Transition::Removed(_) => toast::remove_all(&mut self.document),
        }
    }
}
