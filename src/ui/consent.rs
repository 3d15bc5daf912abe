// SPDX-License-Identifier: MPL-2.0
//! Cookie consent banner.
//!
//! Undecided visitors see `#cookieBanner` a short while after load. Their
//! answer is stored under `cookiesAccepted` and the banner never reappears.

use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::storage::{KeyValueStore, COOKIES_ACCEPTED_KEY};

const BANNER_ID: &str = "cookieBanner";
const ACCEPT_ID: &str = "acceptCookies";
const REJECT_ID: &str = "rejectCookies";
const SHOW_CLASS: &str = "show";

/// The visitor's answer to the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consent {
    Accepted,
    Rejected,
    #[default]
    Undecided,
}

impl Consent {
    /// Reads the stored answer. Anything but `"true"`/`"false"` is undecided.
    pub fn from_store<K: KeyValueStore + ?Sized>(store: &K) -> Self {
        match store.get(COOKIES_ACCEPTED_KEY).as_deref() {
            Some("true") => Consent::Accepted,
            Some("false") => Consent::Rejected,
            _ => Consent::Undecided,
        }
    }

    #[must_use]
    pub fn is_decided(self) -> bool {
        self != Consent::Undecided
    }
}

/// Handles to the banner and its two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub banner: NodeId,
    pub accept: NodeId,
    pub reject: NodeId,
}

impl Banner {
    /// Finds the banner; `None` unless the banner and both buttons exist.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        Some(Self {
            banner: document.element_by_id(BANNER_ID)?,
            accept: document.element_by_id(ACCEPT_ID)?,
            reject: document.element_by_id(REJECT_ID)?,
        })
    }

    /// Shows the banner if the visitor has not answered yet. Called once the
    /// banner delay has elapsed. Returns whether the banner is now shown.
    pub fn reveal_if_undecided<D, K>(&self, document: &mut D, store: &K) -> bool
    where
        D: Document + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        if Consent::from_store(store).is_decided() {
            return false;
        }
        document.add_class(self.banner, SHOW_CLASS);
        true
    }

    /// Records acceptance, hides the banner and enables tracking services.
    pub fn accept<D, K>(&self, document: &mut D, store: &mut K) -> Result<Consent>
    where
        D: Document + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        self.answer(document, store, Consent::Accepted)
    }

    /// Records refusal, hides the banner and disables tracking services.
    pub fn reject<D, K>(&self, document: &mut D, store: &mut K) -> Result<Consent>
    where
        D: Document + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        self.answer(document, store, Consent::Rejected)
    }

    /// The banner closes and services follow the answer even when it cannot
    /// be stored; the storage error is returned afterwards.
    fn answer<D, K>(&self, document: &mut D, store: &mut K, consent: Consent) -> Result<Consent>
    where
        D: Document + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        document.remove_class(self.banner, SHOW_CLASS);
        apply_services(consent);
        let value = if consent == Consent::Accepted { "true" } else { "false" };
        store.set(COOKIES_ACCEPTED_KEY, value)?;
        Ok(consent)
    }
}

/// Re-applies a previous answer when the page loads.
pub fn restore<K: KeyValueStore + ?Sized>(store: &K) -> Consent {
    let consent = Consent::from_store(store);
    if consent == Consent::Accepted {
        apply_services(consent);
    }
    consent
}

fn apply_services(consent: Consent) {
    match consent {
        Consent::Accepted => tracing::info!("Cookies accepted: tracking services enabled"),
        Consent::Rejected => tracing::info!("Cookies rejected: tracking services disabled"),
        Consent::Undecided => {}
    }
}
