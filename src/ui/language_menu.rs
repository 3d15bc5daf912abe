// SPDX-License-Identifier: MPL-2.0
//! Language dropdown next to the navigation.

use crate::dom::{Document, NodeId};

const TOGGLE_ID: &str = "languageToggle";
const DROPDOWN_ID: &str = "languageDropdown";
const SHOW_CLASS: &str = "show";
const OPTION_CLASS: &str = "lang-option";
const FEEDBACK_COLOR: &str = "#e0f2fe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMenu {
    pub toggle: NodeId,
    pub dropdown: NodeId,
}

impl LanguageMenu {
    /// Finds `#languageToggle` and `#languageDropdown`; `None` unless both exist.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        Some(Self {
            toggle: document.element_by_id(TOGGLE_ID)?,
            dropdown: document.element_by_id(DROPDOWN_ID)?,
        })
    }

    /// Opens or closes the dropdown. Returns whether it is now open.
    pub fn toggle<D: Document + ?Sized>(&self, document: &mut D) -> bool {
        document.toggle_class(self.dropdown, SHOW_CLASS)
    }

    pub fn close<D: Document + ?Sized>(&self, document: &mut D) {
        document.remove_class(self.dropdown, SHOW_CLASS);
    }

    #[must_use]
    pub fn is_open<D: Document + ?Sized>(&self, document: &D) -> bool {
        document.has_class(self.dropdown, SHOW_CLASS)
    }

    /// Closes the dropdown when a click lands outside both the toggle and
    /// the dropdown.
    pub fn click_elsewhere<D: Document + ?Sized>(&self, document: &mut D, target: NodeId) {
        if !document.contains(self.toggle, target) && !document.contains(self.dropdown, target) {
            self.close(document);
        }
    }

    /// Returns the locale code carried by a clicked `.lang-option`, closing
    /// the dropdown and highlighting the option. Clicks on anything else
    /// return `None`.
    pub fn pick_option<D: Document + ?Sized>(
        &self,
        document: &mut D,
        option: NodeId,
    ) -> Option<String> {
        if !document.has_class(option, OPTION_CLASS) {
            return None;
        }
        let code = document.attribute(option, "data-lang")?;
        self.close(document);
        document.set_style(option, "background-color", FEEDBACK_COLOR);
        Some(code)
    }

    /// Removes the highlight left by [`Self::pick_option`].
    pub fn clear_feedback<D: Document + ?Sized>(document: &mut D, option: NodeId) {
        document.set_style(option, "background-color", "");
    }
}
