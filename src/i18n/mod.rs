// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. A key missing from the current locale falls back to
//! `en-US`; a key missing everywhere renders as `MISSING: <key>`.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
