// SPDX-License-Identifier: MPL-2.0
//! The small selector vocabulary the site behaviors need.

/// Matches elements by id, class, tag or attribute.
///
/// Covers the handful of CSS selector shapes the page uses:
/// `#id`, `.class`, `tag`, `[attr]`, `[attr="v"]`, `[attr^="v"]`, compound
/// selectors (`a[href^="#"]`) via [`Selector::and`] and groups
/// (`.a, .b`) via [`Selector::any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    Attribute(String),
    AttributeEquals(String, String),
    AttributePrefix(String, String),
    /// Every selector must match (compound selector).
    All(Vec<Selector>),
    /// At least one selector must match (selector group).
    Any(Vec<Selector>),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Selector::Tag(tag.into())
    }

    pub fn attr(name: impl Into<String>) -> Self {
        Selector::Attribute(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::AttributeEquals(name.into(), value.into())
    }

    pub fn attr_prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Selector::AttributePrefix(name.into(), prefix.into())
    }

    /// Group of alternatives, like `.a, .b` in CSS.
    pub fn any(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Selector::Any(selectors.into_iter().collect())
    }

    /// Narrows this selector with another one, like `a[href]` in CSS.
    #[must_use]
    pub fn and(self, other: Selector) -> Self {
        match self {
            Selector::All(mut parts) => {
                parts.push(other);
                Selector::All(parts)
            }
            first => Selector::All(vec![first, other]),
        }
    }

    /// Tests the selector against an element described by its tag and an
    /// attribute accessor.
    pub fn matches<'a, F>(&self, tag: &str, attribute: &F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        match self {
            Selector::Id(id) => attribute("id") == Some(id.as_str()),
            Selector::Class(class) => attribute("class")
                .is_some_and(|list| list.split_whitespace().any(|c| c == class.as_str())),
            Selector::Tag(name) => tag.eq_ignore_ascii_case(name),
            Selector::Attribute(name) => attribute(name.as_str()).is_some(),
            Selector::AttributeEquals(name, value) => {
                attribute(name.as_str()) == Some(value.as_str())
            }
            Selector::AttributePrefix(name, prefix) => {
                attribute(name.as_str()).is_some_and(|v| v.starts_with(prefix.as_str()))
            }
            Selector::All(parts) => parts.iter().all(|s| s.matches(tag, attribute)),
            Selector::Any(parts) => parts.iter().any(|s| s.matches(tag, attribute)),
        }
    }
}
