// SPDX-License-Identifier: MPL-2.0
//! Donation form and message character counter.
//!
//! A valid donation shows a thank-you toast and, after a short delay, opens
//! the chosen provider's checkout page and clears the form. No payment is
//! processed here.

use super::validation::{is_blank, parse_amount, required_fields};
use crate::config::defaults::{
    MESSAGE_DANGER_LENGTH, MESSAGE_WARNING_LENGTH, MIN_DONATION_EUR,
};
use crate::dom::{Document, NodeId, Selector};
use crate::ui::notifications::Notification;

const FORM_ID: &str = "donationForm";
const MESSAGE_ID: &str = "message";
const CHAR_COUNT_ID: &str = "charCount";
const INVALID_BORDER: &str = "#e53e3e";

/// Payment provider picked in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Stripe,
    Paypal,
}

impl PaymentMethod {
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "stripe" => Some(PaymentMethod::Stripe),
            "paypal" => Some(PaymentMethod::Paypal),
            _ => None,
        }
    }

    #[must_use]
    pub fn checkout_url(self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "https://stripe.com/checkout",
            PaymentMethod::Paypal => "https://paypal.com/checkout",
        }
    }
}

/// Redirect to run once the checkout delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkout {
    pub method: Option<PaymentMethod>,
    pub amount: f64,
}

/// Result of submitting the donation form.
#[derive(Debug, Clone)]
pub enum Submission {
    /// Blank required fields were outlined; nothing else to show.
    Incomplete,
    /// Validation failed with a message for the visitor.
    Rejected(Notification),
    /// Accepted. The checkout must run after the redirect delay.
    Accepted {
        notification: Notification,
        checkout: Checkout,
    },
}

impl Submission {
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Submission::Incomplete => None,
            Submission::Rejected(notification) | Submission::Accepted { notification, .. } => {
                Some(notification)
            }
        }
    }
}

/// Message length bands of the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLevel {
    Normal,
    Warning,
    Danger,
}

impl LengthLevel {
    #[must_use]
    pub fn for_length(length: usize) -> Self {
        if length > MESSAGE_DANGER_LENGTH {
            LengthLevel::Danger
        } else if length > MESSAGE_WARNING_LENGTH {
            LengthLevel::Warning
        } else {
            LengthLevel::Normal
        }
    }

    /// Counter text color and textarea border color.
    #[must_use]
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            LengthLevel::Danger => ("#e53e3e", "#e53e3e"),
            LengthLevel::Warning => ("#dd6b20", "#dd6b20"),
            LengthLevel::Normal => ("#718096", "#cbd5e0"),
        }
    }
}

/// `#message` textarea and its `#charCount` display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub message: NodeId,
    pub count: NodeId,
}

impl CharCounter {
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        Some(Self {
            message: document.element_by_id(MESSAGE_ID)?,
            count: document.element_by_id(CHAR_COUNT_ID)?,
        })
    }

    /// Shows the current length without restyling, as on page load.
    pub fn init<D: Document + ?Sized>(&self, document: &mut D) {
        let length = document.value(self.message).chars().count();
        document.set_text(self.count, &length.to_string());
    }

    /// Updates the count and colors after the message changed.
    pub fn update<D: Document + ?Sized>(&self, document: &mut D) -> LengthLevel {
        let length = document.value(self.message).chars().count();
        document.set_text(self.count, &length.to_string());
        let level = LengthLevel::for_length(length);
        let (counter_color, border_color) = level.colors();
        document.set_style(self.count, "color", counter_color);
        document.set_style(self.message, "border-color", border_color);
        level
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationForm {
    pub form: NodeId,
}

impl DonationForm {
    /// Finds `#donationForm`.
    pub fn find<D: Document + ?Sized>(document: &D) -> Option<Self> {
        document.element_by_id(FORM_ID).map(|form| Self { form })
    }

    /// Outlines blank required fields in red and clears the outline of the
    /// others, then checks the consent box.
    ///
    /// Returns the consent toast when the box is unchecked, or `Ok(false)`
    /// when only required fields are missing.
    fn validate<D: Document + ?Sized>(&self, document: &mut D) -> Result<bool, Notification> {
        let mut complete = true;
        for field in required_fields(document, self.form) {
            if is_blank(document, field) {
                document.set_style(field, "border-color", INVALID_BORDER);
                complete = false;
            } else {
                document.set_style(field, "border-color", "");
            }
        }

        let consent = Selector::tag("input").and(Selector::attr_eq("name", "consent"));
        let consent_box = document
            .select_within(self.form, &consent)
            .into_iter()
            .next();
        if consent_box.is_some_and(|node| !document.is_checked(node)) {
            return Err(Notification::error(
                "notifications.consentRequired",
                "Vous devez accepter la politique de confidentialité",
            ));
        }
        Ok(complete)
    }

    fn field_value<D: Document + ?Sized>(&self, document: &D, id: &str) -> String {
        document
            .element_by_id(id)
            .map(|node| document.value(node))
            .unwrap_or_default()
    }

    fn payment_method<D: Document + ?Sized>(&self, document: &D) -> Option<PaymentMethod> {
        let choices = Selector::attr_eq("name", "paymentMethod");
        document
            .select_within(self.form, &choices)
            .into_iter()
            .find(|node| match document.attribute(*node, "type").as_deref() {
                Some("radio" | "checkbox") => document.is_checked(*node),
                _ => true,
            })
            .and_then(|node| PaymentMethod::from_value(&document.value(node)))
    }

    /// Validates the form. Accepted submissions carry the checkout to run
    /// after the redirect delay.
    pub fn submit<D: Document + ?Sized>(&self, document: &mut D) -> Submission {
        match self.validate(document) {
            Err(notification) => return Submission::Rejected(notification),
            Ok(false) => return Submission::Incomplete,
            Ok(true) => {}
        }

        if self.field_value(document, "email") != self.field_value(document, "confirmEmail") {
            return Submission::Rejected(Notification::error(
                "notifications.emailMismatch",
                "Les adresses email ne correspondent pas",
            ));
        }

        let amount = parse_amount(&self.field_value(document, "donationAmount"))
            .filter(|amount| *amount >= MIN_DONATION_EUR);
        let Some(amount) = amount else {
            return Submission::Rejected(Notification::error(
                "notifications.invalidAmount",
                "Veuillez entrer un montant valide (minimum 1€)",
            ));
        };

        let method = self.payment_method(document);
        tracing::info!(amount, ?method, "Donation accepted");
        Submission::Accepted {
            notification: Notification::success(
                "notifications.donationSuccess",
                "Merci pour votre don! Redirection vers le système de paiement...",
            ),
            checkout: Checkout { method, amount },
        }
    }

    /// Opens the provider's checkout page and clears the form and counter.
    pub fn complete<D: Document + ?Sized>(
        &self,
        document: &mut D,
        checkout: Checkout,
        counter: Option<CharCounter>,
    ) {
        match checkout.method {
            Some(method) => document.open_window(method.checkout_url()),
            None => tracing::warn!("Donation without a payment method; no checkout opened"),
        }
        document.reset_form(self.form);
        if let Some(counter) = counter {
            document.set_text(counter.count, "0");
        }
    }
}
