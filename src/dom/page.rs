// SPDX-License-Identifier: MPL-2.0
//! In-memory document tree.
//!
//! `Page` holds an `<html>` root with a `<body>` child and records the
//! navigation side effects (focus, scrolling, history, opened windows) so
//! they can be inspected. Removed subtrees free their slots for later
//! appends.

use super::{Document, NodeId, Selector};
use std::collections::BTreeMap;

/// An element under construction or stored in a [`Page`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Adds a class to the element's class list.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        let list = match self.attributes.remove("class") {
            Some(existing) => format!("{existing} {class}"),
            None => class.to_string(),
        };
        self.attributes.insert("class".to_string(), list);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(&self.tag, &|name: &str| self.attribute(name))
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// An in-memory [`Document`].
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    scrolled_to: Option<NodeId>,
    history: Vec<String>,
    opened_windows: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Creates an empty `<html><body></body></html>` document.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            nodes: vec![Slot {
                generation: 0,
                element: Some(Element::new("html")),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 0),
            body: NodeId::new(0, 0),
            focused: None,
            scrolled_to: None,
            history: Vec::new(),
            opened_windows: Vec::new(),
        };
        page.body = page.append(page.root, Element::new("body"));
        page
    }

    /// Appends `element` as the last child of `parent` and returns its id.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        element.parent = Some(parent);
        element.children.clear();
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.nodes[index];
                slot.element = Some(element);
                NodeId::new(index, slot.generation)
            }
            None => {
                self.nodes.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                NodeId::new(self.nodes.len() - 1, 0)
            }
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    /// Number of live elements, `<html>` and `<body>` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `element` to `<body>`.
    pub fn append_to_body(&mut self, element: Element) -> NodeId {
        self.append(self.body, element)
    }

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    #[must_use]
    pub fn scrolled_to(&self) -> Option<NodeId> {
        self.scrolled_to
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn opened_windows(&self) -> &[String] {
        &self.opened_windows
    }

    fn node(&self, id: NodeId) -> Option<&Element> {
        self.nodes
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    /// Frees `node` and its descendants.
    fn release(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let Some(slot) = self
                .nodes
                .get_mut(id.index)
                .filter(|slot| slot.generation == id.generation)
            else {
                continue;
            };
            let Some(element) = slot.element.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
            pending.extend(element.children);
        }
    }

    /// Collects matching descendants of `root` in pre-order.
    fn collect(&self, root: NodeId, selector: &Selector, out: &mut Vec<NodeId>) {
        let Some(element) = self.node(root) else {
            return;
        };
        for &child in &element.children {
            if self.node(child).is_some_and(|c| c.matches(selector)) {
                out.push(child);
            }
            self.collect(child, selector, out);
        }
    }
}

impl Document for Page {
    fn select(&self, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.node(self.root).is_some_and(|r| r.matches(selector)) {
            out.push(self.root);
        }
        self.collect(self.root, selector, &mut out);
        out
    }

    fn select_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(root, selector, &mut out);
        out
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|e| e.parent);
        }
        false
    }

    fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.append(parent, Element::new(tag))
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root || node == self.body {
            return;
        }
        let Some(parent) = self.node_mut(node).and_then(|e| e.parent.take()) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|&child| child != node);
        }
        self.release(node);
        if self.focused.is_some_and(|id| self.node(id).is_none()) {
            self.focused = None;
        }
        if self.scrolled_to.is_some_and(|id| self.node(id).is_none()) {
            self.scrolled_to = None;
        }
    }

    fn tag(&self, node: NodeId) -> Option<String> {
        self.node(node).map(|e| e.tag.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)
            .and_then(|e| e.attribute(name))
            .map(str::to_string)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.node_mut(node) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.node_mut(node) {
            element.attributes.remove(name);
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.node(node).map(|e| e.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.node_mut(node) {
            element.text = text.to_string();
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node).and_then(|e| e.style.get(property).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(element) = self.node_mut(node) {
            if value.is_empty() {
                element.style.remove(property);
            } else {
                element.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn language(&self) -> Option<String> {
        self.attribute(self.root, "lang")
    }

    fn set_language(&mut self, lang: &str) {
        self.set_attribute(self.root, "lang", lang);
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        self.scrolled_to = Some(node);
    }

    fn push_history(&mut self, url: &str) {
        self.history.push(url.to_string());
    }

    fn open_window(&mut self, url: &str) {
        self.opened_windows.push(url.to_string());
    }
}
