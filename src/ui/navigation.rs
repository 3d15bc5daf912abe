// SPDX-License-Identifier: MPL-2.0
//! Mobile menu, in-page anchors and navbar styling.

use crate::config::defaults::NAVBAR_SOLID_SCROLL_Y;
use crate::dom::{Document, NodeId, Selector};

const ACTIVE_CLASS: &str = "active";

/// Handles to the hamburger button and the menu it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    pub hamburger: NodeId,
    pub menu: NodeId,
}

impl MobileMenu {
    /// Finds `.hamburger` and `.nav-menu`; `None` unless both exist.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        Some(Self {
            hamburger: document.select_first(&Selector::class("hamburger"))?,
            menu: document.select_first(&Selector::class("nav-menu"))?,
        })
    }

    /// Opens or closes the menu. The page stops scrolling while it is open.
    /// Returns whether the menu is now open.
    pub fn toggle<D: Document + ?Sized>(&self, document: &mut D) -> bool {
        document.toggle_class(self.hamburger, ACTIVE_CLASS);
        let open = document.toggle_class(self.menu, ACTIVE_CLASS);
        let body = document.body();
        document.set_style(body, "overflow", if open { "hidden" } else { "" });
        open
    }

    /// Closes the menu, as after following one of its links.
    pub fn close<D: Document + ?Sized>(&self, document: &mut D) {
        document.remove_class(self.hamburger, ACTIVE_CLASS);
        document.remove_class(self.menu, ACTIVE_CLASS);
        let body = document.body();
        document.set_style(body, "overflow", "");
    }
}

/// Follows an in-page anchor link.
///
/// A bare `#` does nothing. Otherwise, when the target exists, it is scrolled
/// into view and the hash is pushed onto history. Returns whether the
/// default navigation should be prevented.
pub fn follow_anchor<D: Document + ?Sized>(document: &mut D, href: &str) -> bool {
    let Some(id) = href.strip_prefix('#') else {
        return false;
    };
    if id.is_empty() {
        return false;
    }
    if let Some(target) = document.element_by_id(id) {
        document.scroll_into_view(target);
        document.push_history(href);
    }
    true
}

/// Scrolls the section with the given id into view, if present.
pub fn scroll_to_section<D: Document + ?Sized>(document: &mut D, section_id: &str) -> bool {
    match document.element_by_id(section_id) {
        Some(section) => {
            document.scroll_into_view(section);
            true
        }
        None => false,
    }
}

/// Navbar appearance for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At the top of the page.
    Translucent,
    /// Past the scroll threshold.
    Solid,
}

impl NavbarStyle {
    #[must_use]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SOLID_SCROLL_Y {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        }
    }

    fn properties(self) -> [(&'static str, &'static str); 3] {
        match self {
            NavbarStyle::Solid => [
                ("background", "rgba(255, 255, 255, 0.98)"),
                ("box-shadow", "0 2px 20px rgba(0, 0, 0, 0.1)"),
                ("backdrop-filter", "blur(10px)"),
            ],
            NavbarStyle::Translucent => [
                ("background", "rgba(255, 255, 255, 0.95)"),
                ("box-shadow", "none"),
                ("backdrop-filter", "none"),
            ],
        }
    }
}

/// Restyles `.navbar` for the current scroll offset.
pub fn update_navbar<D: Document + ?Sized>(document: &mut D, scroll_y: f64) -> Option<NavbarStyle> {
    let navbar = document.select_first(&Selector::class("navbar"))?;
    let style = NavbarStyle::for_scroll(scroll_y);
    for (property, value) in style.properties() {
        document.set_style(navbar, property, value);
    }
    Some(style)
}
