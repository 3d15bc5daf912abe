// SPDX-License-Identifier: MPL-2.0
//! Deferred actions driven by the caller's clock.
//!
//! Behaviors that act "a little later" (banner delay, card fades, checkout
//! redirect) enqueue an action with a due instant. The owner calls
//! [`Schedule::drain_due`] from its tick and runs whatever came due.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Schedule<A> {
    entries: Vec<(Instant, A)>,
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> Schedule<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to run `delay` after `now`.
    pub fn after(&mut self, now: Instant, delay: Duration, action: A) {
        self.entries.push((now + delay, action));
    }

    /// Removes and returns every action due at `now`, earliest first.
    /// Actions due at the same instant keep their insertion order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|(at, _)| *at <= now);
        self.entries = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, action)| action).collect()
    }

    /// Earliest instant at which something is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|(at, _)| *at).min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drops queued actions matching `predicate`.
    pub fn cancel(&mut self, mut predicate: impl FnMut(&A) -> bool) {
        self.entries.retain(|(_, action)| !predicate(action));
    }
}
