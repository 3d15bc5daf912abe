// SPDX-License-Identifier: MPL-2.0
//! Site forms with client-side validation.
//!
//! Submissions never leave the page: each form validates its fields and
//! returns the toast to show. Donations additionally produce a checkout to
//! run after a delay.

mod contact;
mod donation;
mod newsletter;
mod validation;

pub use contact::ContactForm;
pub use donation::{CharCounter, Checkout, DonationForm, LengthLevel, PaymentMethod, Submission};
pub use newsletter::{NewsletterForm, NewsletterModal};
pub use validation::{parse_amount, validate_email};
