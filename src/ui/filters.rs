// SPDX-License-Identifier: MPL-2.0
//! Scholar directory filters and pagination.

use crate::config::defaults::{FILTER_FADE_IN_DELAY, FILTER_HIDE_DELAY};
use crate::dom::{Document, NodeId, Selector};
use crate::ui::notifications::Notification;
use std::time::Duration;

const ACTIVE_CLASS: &str = "active";
const ALL_CATEGORY: &str = "all";

/// A card style change that happens after a short delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Fade the card in and slide it into place.
    FadeIn(NodeId),
    /// Remove the card from layout once it has faded out.
    Hide(NodeId),
}

impl CardEffect {
    #[must_use]
    pub fn card(self) -> NodeId {
        match self {
            CardEffect::FadeIn(card) | CardEffect::Hide(card) => card,
        }
    }

    pub fn apply<D: Document + ?Sized>(self, document: &mut D) {
        match self {
            CardEffect::FadeIn(card) => {
                document.set_style(card, "opacity", "1");
                document.set_style(card, "transform", "translateY(0)");
            }
            CardEffect::Hide(card) => document.set_style(card, "display", "none"),
        }
    }
}

/// The `.filter-btn` row above the `.scholar-card` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarFilters {
    buttons: Vec<NodeId>,
    cards: Vec<NodeId>,
}

impl ScholarFilters {
    /// `None` when the page has no filter buttons or no cards.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        let buttons = document.select(&Selector::class("filter-btn"));
        let cards = document.select(&Selector::class("scholar-card"));
        if buttons.is_empty() || cards.is_empty() {
            return None;
        }
        Some(Self { buttons, cards })
    }

    #[must_use]
    pub fn is_button(&self, node: NodeId) -> bool {
        self.buttons.contains(&node)
    }

    /// Activates `button` and filters the cards by its `data-category`.
    ///
    /// Matching cards are displayed right away; the returned effects finish
    /// the transition and must be applied after their delay.
    pub fn select<D: Document + ?Sized>(
        &self,
        document: &mut D,
        button: NodeId,
    ) -> Vec<(Duration, CardEffect)> {
        for other in &self.buttons {
            document.remove_class(*other, ACTIVE_CLASS);
        }
        document.add_class(button, ACTIVE_CLASS);

        let category = document.attribute(button, "data-category");
        tracing::debug!("Filtering scholars by {:?}", category);

        let mut effects = Vec::with_capacity(self.cards.len());
        for card in &self.cards {
            let shown = match category.as_deref() {
                Some(ALL_CATEGORY) => true,
                _ => document.attribute(*card, "data-category") == category,
            };
            if shown {
                document.set_style(*card, "display", "block");
                effects.push((FILTER_FADE_IN_DELAY, CardEffect::FadeIn(*card)));
            } else {
                document.set_style(*card, "opacity", "0");
                document.set_style(*card, "transform", "translateY(20px)");
                effects.push((FILTER_HIDE_DELAY, CardEffect::Hide(*card)));
            }
        }
        effects
    }
}

/// `.pagination-btn` row under the scholar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    buttons: Vec<NodeId>,
}

impl Pagination {
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        let buttons = document.select(&Selector::class("pagination-btn"));
        (!buttons.is_empty()).then_some(Self { buttons })
    }

    #[must_use]
    pub fn is_button(&self, node: NodeId) -> bool {
        self.buttons.contains(&node)
    }

    /// Activates `button` and returns the loading toast for its page.
    pub fn select<D: Document + ?Sized>(&self, document: &mut D, button: NodeId) -> Notification {
        for other in &self.buttons {
            document.remove_class(*other, ACTIVE_CLASS);
        }
        document.add_class(button, ACTIVE_CLASS);
        let page = document.text(button);
        Notification::info("notifications.pageLoading", "Chargement de la page {page}...")
            .with_arg("page", page.trim())
    }
}
