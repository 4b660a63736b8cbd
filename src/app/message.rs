// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::manifest::{CanvasId, Manifest};
use crate::ui::{control_panel, gallery, sidebar_index};
use iced::keyboard::Key;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ControlPanel(control_panel::Message),
    Gallery(gallery::Message),
    Sidebar(sidebar_index::Message),
    ManifestLoaded(Result<Manifest, Error>),
    /// Result from the open manifest dialog.
    OpenManifestDialogResult(Option<PathBuf>),
    /// Annotation count of a canvas, in answer to a tile request made while
    /// the annotation store was at `generation`.
    AnnotationsLoaded {
        generation: u64,
        id: CanvasId,
        count: u32,
    },
    /// Leave the single-canvas view.
    BackToGallery,
    DismissStatus,
    WindowResized(Size),
    /// Key press no widget captured.
    KeyPressed(Key),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`).
    pub lang: Option<String>,
    /// Manifest to open on startup.
    pub manifest_path: Option<String>,
}
