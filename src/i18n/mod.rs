// SPDX-License-Identifier: MPL-2.0
//! Translations of the user interface.
//!
//! The `.ftl` files under `assets/i18n/` are embedded into the binary and
//! loaded into one Fluent bundle per locale. The locale comes from the
//! `--lang` argument, then the config file, then the desktop locale, and
//! falls back to `en-US`. It can be switched at runtime from the control
//! panel.

pub mod fluent;
