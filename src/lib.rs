// SPDX-License-Identifier: MPL-2.0
//! `iiif_gallery` browses the pages of a IIIF manifest as a gallery of
//! thumbnails.
//!
//! Each canvas gets a tile that asks for its annotations the first time it
//! scrolls into view. Counts and search matches are shown as badges on the
//! tiles. An index sidebar and a control panel complete the workspace.

pub mod annotations;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod ui;
