// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters.
//!
//! When a statistics section becomes half visible, every `.stat-number` in it
//! counts up from zero to the number it displays, then shows `"<n>+"`.

use crate::config::defaults::{COUNTER_DURATION, COUNTER_FRAME, STATS_THRESHOLD};
use crate::dom::{Document, NodeId, Selector};
use std::time::Instant;

/// Classes of the sections whose counters animate.
pub const STATS_SECTIONS: [&str; 2] = ["about", "scholars-stats"];

const STAT_CLASS: &str = "stat-number";

/// Reads the integer a stat displays, ignoring the `+` suffix.
///
/// Leading digits are taken and anything after them is ignored, so `"1 200"`
/// reads as `1`. Text without leading digits has no target.
#[must_use]
pub fn parse_target(text: &str) -> Option<u64> {
    let text = text.replacen('+', "", 1);
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// One stat counting up.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    node: NodeId,
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl Counter {
    #[must_use]
    pub fn new(node: NodeId, target: u64) -> Self {
        let frames = COUNTER_DURATION.as_millis() as f64 / COUNTER_FRAME.as_millis() as f64;
        Self {
            node,
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one frame and returns the text to display, or `None` once
    /// the counter has finished.
    pub fn frame(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(format!("{}+", self.target))
        } else {
            Some((self.current.floor() as u64).to_string())
        }
    }
}

/// The counters of one section, driven by elapsed time.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    counters: Vec<Counter>,
    started_at: Instant,
    frames_run: u32,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(counters: Vec<Counter>, started_at: Instant) -> Self {
        Self {
            counters,
            started_at,
            frames_run: 0,
        }
    }

    #[must_use]
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Runs every frame that has elapsed by `now`, writing the latest text
    /// of each counter. Returns whether all counters have finished.
    pub fn tick<D: Document + ?Sized>(&mut self, document: &mut D, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        let due = (elapsed.as_millis() / COUNTER_FRAME.as_millis()) as u32;
        while self.frames_run < due && !self.is_finished() {
            self.frames_run += 1;
            for counter in &mut self.counters {
                if let Some(text) = counter.frame() {
                    document.set_text(counter.node, &text);
                }
            }
        }
        self.is_finished()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.counters.iter().all(Counter::is_finished)
    }
}

/// Watches the statistics sections until each has started its counters.
#[derive(Debug, Default)]
pub struct StatsObserver {
    pending: Vec<NodeId>,
}

impl StatsObserver {
    pub fn observe<D: Document + ?Sized>(document: &D) -> Self {
        let pending = STATS_SECTIONS
            .iter()
            .filter_map(|class| document.select_first(&Selector::class(*class)))
            .collect();
        Self { pending }
    }

    #[must_use]
    pub fn is_observing(&self, section: NodeId) -> bool {
        self.pending.contains(&section)
    }

    /// Reports how much of `section` is visible. At the threshold the
    /// section stops being observed and its counters start at `now`.
    pub fn intersect<D: Document + ?Sized>(
        &mut self,
        document: &D,
        section: NodeId,
        ratio: f32,
        now: Instant,
    ) -> Option<CounterAnimation> {
        if ratio <= 0.0 || ratio < STATS_THRESHOLD {
            return None;
        }
        let index = self.pending.iter().position(|node| *node == section)?;
        self.pending.remove(index);

        let counters: Vec<Counter> = document
            .select_within(section, &Selector::class(STAT_CLASS))
            .into_iter()
            .filter_map(|stat| {
                let target = parse_target(&document.text(stat))?;
                Some(Counter::new(stat, target))
            })
            .collect();
        tracing::debug!("Starting {} counters", counters.len());
        Some(CounterAnimation::new(counters, now))
    }
}
