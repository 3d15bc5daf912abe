// SPDX-License-Identifier: MPL-2.0
//! Document abstraction the page behaviors read from and write to.
//!
//! Behaviors never talk to a concrete DOM. They go through [`Document`],
//! which a browser binding or the in-memory [`Page`] implements. Lookups
//! return empty results for absent elements so callers can skip them
//! without error handling.
//!
//! # Components
//!
//! - [`selector`] - `Selector` vocabulary (`#id`, `.class`, `[attr]`, ...)
//! - [`page`] - `Page`, an in-memory document tree

mod page;
mod selector;

pub use page::{Element, Page};
pub use selector::Selector;

/// Handle to an element of a [`Document`].
///
/// The generation tells apart elements that reuse the slot of a removed one,
/// so a stale handle never reaches its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Read/write access to a page.
pub trait Document {
    /// Returns every element matching `selector`, in document order.
    fn select(&self, selector: &Selector) -> Vec<NodeId>;

    /// Returns the descendants of `root` matching `selector`, in document order.
    fn select_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Creates a `tag` element as the last child of `parent`.
    fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId;
    /// Detaches `node` (and its subtree) from the document.
    fn remove(&mut self, node: NodeId);

    fn tag(&self, node: NodeId) -> Option<String>;
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn text(&self, node: NodeId) -> String;
    fn set_text(&mut self, node: NodeId, text: &str);

    fn style(&self, node: NodeId, property: &str) -> Option<String>;
    /// Sets an inline style property. An empty value clears it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// The `<body>` element.
    fn body(&self) -> NodeId;

    /// The document element's `lang` attribute.
    fn language(&self) -> Option<String>;
    fn set_language(&mut self, lang: &str);

    fn focus(&mut self, node: NodeId);
    /// Smoothly scrolls `node` to the top of the viewport.
    fn scroll_into_view(&mut self, node: NodeId);
    /// Pushes `url` onto the session history without reloading.
    fn push_history(&mut self, url: &str);
    /// Opens `url` in a new browsing context.
    fn open_window(&mut self, url: &str);

    fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.select(selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.select_first(&Selector::id(id))
    }

    /// The innermost element matching `selector` that is `node` or one of
    /// its ancestors.
    fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        self.select(selector)
            .into_iter()
            .rev()
            .find(|candidate| self.contains(*candidate, node))
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let list = match self.attribute(node, "class") {
            Some(list) if !list.trim().is_empty() => format!("{} {}", list.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &list);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        let Some(list) = self.attribute(node, "class") else {
            return;
        };
        let kept: Vec<&str> = list.split_whitespace().filter(|c| *c != class).collect();
        self.set_attribute(node, "class", &kept.join(" "));
    }

    /// Toggles `class` and returns whether it is now present.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Value of a form control (`value` attribute), empty when unset.
    fn value(&self, node: NodeId) -> String {
        self.attribute(node, "value").unwrap_or_default()
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.attribute(node, "checked").is_some()
    }

    /// Clears every control inside `form`.
    fn reset_form(&mut self, form: NodeId) {
        let controls = Selector::any([
            Selector::tag("input"),
            Selector::tag("textarea"),
            Selector::tag("select"),
        ]);
        for control in self.select_within(form, &controls) {
            match self.attribute(control, "type").as_deref() {
                Some("checkbox" | "radio") => self.remove_attribute(control, "checked"),
                _ => self.remove_attribute(control, "value"),
            }
        }
    }
}
