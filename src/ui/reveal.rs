// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal of content cards.
//!
//! Tracked elements start hidden and slide into place the first time enough
//! of them enters the viewport. Each element is revealed at most once.

use crate::config::defaults::REVEAL_THRESHOLD;
use crate::dom::{Document, NodeId, Selector};
use std::collections::BTreeSet;

/// Classes of the elements that animate in.
pub const REVEAL_CLASSES: [&str; 5] = [
    "team-member",
    "value-card",
    "contact-info",
    "info-card",
    "scholar-card",
];

#[derive(Debug, Default)]
pub struct RevealObserver {
    pending: BTreeSet<NodeId>,
}

impl RevealObserver {
    /// Hides every tracked element and starts observing it.
    pub fn observe<D: Document + ?Sized>(document: &mut D) -> Self {
        let selector = Selector::any(REVEAL_CLASSES.map(Selector::class));
        let mut pending = BTreeSet::new();
        for node in document.select(&selector) {
            document.set_style(node, "opacity", "0");
            document.set_style(node, "transform", "translateY(30px)");
            document.set_style(node, "transition", "opacity 0.6s ease, transform 0.6s ease");
            pending.insert(node);
        }
        tracing::debug!("Observing {} elements for reveal", pending.len());
        Self { pending }
    }

    /// Reports how much of `node` is visible. Reveals it and stops
    /// observing once the ratio reaches the threshold.
    pub fn intersect<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        node: NodeId,
        ratio: f32,
    ) -> bool {
        if ratio <= 0.0 || ratio < REVEAL_THRESHOLD || !self.pending.remove(&node) {
            return false;
        }
        document.set_style(node, "opacity", "1");
        document.set_style(node, "transform", "translateY(0)");
        true
    }

    #[must_use]
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.pending.contains(&node)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
