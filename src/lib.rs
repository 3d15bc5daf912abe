// SPDX-License-Identifier: MPL-2.0
//! `candogmatic` drives the client-side behavior of the Can Dogmatic website.
//!
//! Its core is the translation resolver: it picks the visitor's locale, loads
//! the matching JSON catalog (with a single fallback to Catalan) and rewrites
//! every marked element of the page. Around it sit the page behaviors: cookie
//! consent, navigation, forms with client-side validation, toasts and
//! scroll-triggered animations. All of them work against the [`dom::Document`]
//! abstraction so they run unchanged on an in-memory [`dom::Page`].

#![doc(html_root_url = "https://docs.rs/candogmatic/0.3.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_utils;
