// SPDX-License-Identifier: MPL-2.0
//! Contact form.

use super::validation::{is_blank, required_fields};
use crate::dom::{Document, NodeId, Selector};
use crate::ui::notifications::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactForm {
    pub form: NodeId,
}

impl ContactForm {
    /// Finds the `.contact-form` element.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        document
            .select_first(&Selector::class("contact-form"))
            .map(|form| Self { form })
    }

    /// Focuses the first blank required field, if any. Returns whether every
    /// required field is filled.
    pub fn validate<D: Document + ?Sized>(&self, document: &mut D) -> bool {
        let blank = required_fields(document, self.form)
            .into_iter()
            .find(|field| is_blank(document, *field));
        match blank {
            Some(field) => {
                document.focus(field);
                false
            }
            None => true,
        }
    }

    /// Validates and, when valid, resets the form. Returns the toast to show.
    pub fn submit<D: Document + ?Sized>(&self, document: &mut D) -> Notification {
        if !self.validate(document) {
            return Notification::error(
                "notifications.requiredFields",
                "Veuillez remplir tous les champs obligatoires",
            );
        }
        let fields = document
            .select_within(self.form, &Selector::attr("name"))
            .len();
        tracing::info!(fields, "Contact message submitted");
        document.reset_form(self.form);
        Notification::success(
            "notifications.contactSuccess",
            "Message envoyé avec succès ! Nous vous recontacterons rapidement.",
        )
    }
}
