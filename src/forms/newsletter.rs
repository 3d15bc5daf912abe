// SPDX-License-Identifier: MPL-2.0
//! Newsletter modal and sign-up form.

use super::validation::validate_email;
use crate::dom::{Document, NodeId, Selector};
use crate::ui::notifications::Notification;

const MODAL_ID: &str = "newsletterModal";
const FORM_CLASS: &str = "newsletter-form";

/// The `#newsletterModal` overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterModal {
    pub modal: NodeId,
}

impl NewsletterModal {
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        document.element_by_id(MODAL_ID).map(|modal| Self { modal })
    }

    #[must_use]
    pub fn is_open<D: Document + ?Sized>(&self, document: &D) -> bool {
        document.style(self.modal, "display").as_deref() == Some("block")
    }

    /// Opens or closes the modal. The page stops scrolling while it is open.
    /// Returns whether the modal is now open.
    pub fn toggle<D: Document + ?Sized>(&self, document: &mut D) -> bool {
        let open = !self.is_open(document);
        document.set_style(self.modal, "display", if open { "block" } else { "none" });
        let body = document.body();
        document.set_style(body, "overflow", if open { "hidden" } else { "" });
        open
    }

    pub fn close<D: Document + ?Sized>(&self, document: &mut D) {
        document.set_style(self.modal, "display", "none");
        let body = document.body();
        document.set_style(body, "overflow", "");
    }

    /// Closes the modal when the click landed on its backdrop rather than on
    /// its content.
    pub fn click<D: Document + ?Sized>(&self, document: &mut D, target: NodeId) -> bool {
        if target != self.modal {
            return false;
        }
        self.close(document);
        true
    }
}

/// The `.newsletter-form` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterForm {
    pub form: NodeId,
}

impl NewsletterForm {
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        document
            .select_first(&Selector::class(FORM_CLASS))
            .map(|form| Self { form })
    }

    /// Validates the email field. On success the form is reset and the modal
    /// (if any) toggled. Returns the toast to show.
    pub fn submit<D: Document + ?Sized>(
        &self,
        document: &mut D,
        modal: Option<NewsletterModal>,
    ) -> Notification {
        let email_input = Selector::tag("input").and(Selector::attr_eq("type", "email"));
        let email = document
            .select_within(self.form, &email_input)
            .into_iter()
            .next()
            .map(|input| document.value(input))
            .unwrap_or_default();

        if email.is_empty() || !validate_email(&email) {
            tracing::debug!("Newsletter sign-up rejected: invalid email");
            return Notification::error(
                "notifications.invalidEmail",
                "Veuillez entrer une adresse email valide",
            );
        }

        tracing::info!("Newsletter sign-up received");
        document.reset_form(self.form);
        if let Some(modal) = modal {
            modal.toggle(document);
        }
        Notification::success(
            "notifications.newsletterSuccess",
            "Merci pour votre inscription à notre newsletter !",
        )
    }
}
