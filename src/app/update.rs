// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{gallery_context, App, Message, ViewMode};
use crate::annotations::{self, SearchHits};
use crate::config::{self, CONTROL_PANEL_THICKNESS};
use crate::manifest::{CanvasId, Manifest};
use crate::ui::control_panel::{self, Orientation};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery;
use crate::ui::sidebar_index;
use crate::ui::theming::AppTheme;
use iced::keyboard::key::{Key, Named};
use iced::{Size, Task};

/// Height of the search row above the gallery grid.
const GALLERY_HEADER_HEIGHT: f32 = sizing::BUTTON_HEIGHT + 2.0 * spacing::XS;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ControlPanel(message) => {
                let event = control_panel::update(message);
                self.handle_control_panel_event(event)
            }
            Message::Gallery(message) => {
                let events = self.gallery.update(
                    message,
                    &gallery_context(&self.manifest, &self.current, &self.annotations, &self.search),
                );
                self.handle_gallery_events(events)
            }
            Message::Sidebar(message) => {
                let sidebar_index::Event::SetCanvas(id) = sidebar_index::update(message);
                self.set_current(id);
                Task::none()
            }
            Message::ManifestLoaded(Ok(manifest)) => self.handle_manifest_loaded(manifest),
            Message::ManifestLoaded(Err(err)) => {
                log::warn!("Failed to load manifest: {err}");
                self.loading = false;
                self.status = Some(err.i18n_key().to_string());
                Task::none()
            }
            Message::OpenManifestDialogResult(Some(path)) => self.load_manifest(path),
            Message::OpenManifestDialogResult(None) => Task::none(),
            Message::AnnotationsLoaded {
                generation,
                id,
                count,
            } => {
                if self.annotations.resolve(generation, id.clone(), count) {
                    log::debug!("{count} annotation(s) on canvas {id}");
                } else {
                    log::debug!("Dropped stale annotation count for canvas {id}");
                }
                Task::none()
            }
            Message::BackToGallery => {
                self.view_mode = ViewMode::Gallery;
                Task::none()
            }
            Message::DismissStatus => {
                self.status = None;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.forward_gallery_size()
            }
            Message::KeyPressed(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: Key) -> Task<Message> {
        match self.view_mode {
            ViewMode::Canvas if key == Key::Named(Named::Escape) => {
                self.view_mode = ViewMode::Gallery;
                Task::none()
            }
            ViewMode::Canvas => Task::none(),
            ViewMode::Gallery => self.update(Message::Gallery(gallery::Message::KeyPressed(key))),
        }
    }

    fn handle_control_panel_event(&mut self, event: control_panel::Event) -> Task<Message> {
        match event {
            control_panel::Event::OpenManifest => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("IIIF manifest", &["json", "jsonld"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenManifestDialogResult,
            ),
            control_panel::Event::ToggleIndex => {
                self.config.sidebar.open = !self.config.sidebar.open;
                self.persist_config();
                self.forward_gallery_size()
            }
            control_panel::Event::ToggleTheme => {
                let mode = self.theme.mode.toggled();
                self.config.general.theme_mode = mode;
                self.theme = AppTheme::new(mode);
                self.persist_config();
                Task::none()
            }
            control_panel::Event::CycleLanguage => {
                let locale = self.i18n.cycle_locale().to_string();
                self.config.general.language = Some(locale);
                self.persist_config();
                Task::none()
            }
        }
    }

    fn handle_gallery_events(&mut self, events: Vec<gallery::Event>) -> Task<Message> {
        let mut tasks = Vec::new();
        for event in events {
            match event {
                gallery::Event::SetCanvas(id) => self.set_current(id),
                gallery::Event::FocusOnCanvas => {
                    if self.current.is_some() {
                        self.view_mode = ViewMode::Canvas;
                    }
                }
                gallery::Event::RequestCanvasAnnotations(id) => {
                    tasks.push(self.request_annotations(&id));
                }
                gallery::Event::SearchChanged(query) => {
                    self.search = SearchHits::new(&query, self.canvases());
                }
            }
        }
        Task::batch(tasks)
    }

    /// Starts loading the annotations of a canvas unless that already happened.
    fn request_annotations(&mut self, id: &CanvasId) -> Task<Message> {
        if !self.annotations.mark_requested(id) {
            return Task::none();
        }
        let Some(canvas) = self.manifest.as_ref().and_then(|m| m.canvas(id)) else {
            return Task::none();
        };
        let generation = self.annotations.generation();
        Task::perform(
            annotations::count_embedded(canvas.clone()),
            move |(id, count)| Message::AnnotationsLoaded {
                generation,
                id,
                count,
            },
        )
    }

    fn handle_manifest_loaded(&mut self, manifest: Manifest) -> Task<Message> {
        log::info!(
            "Loaded manifest {} with {} canvas(es)",
            manifest.id.as_deref().unwrap_or("(no id)"),
            manifest.canvases.len()
        );
        self.loading = false;
        self.status = None;
        self.annotations.clear();
        self.search = SearchHits::default();
        self.current = manifest.canvases.first().map(|canvas| canvas.id().clone());
        self.view_mode = ViewMode::Gallery;
        self.manifest = Some(manifest);

        let area = self.gallery_area();
        let ctx = gallery_context(&self.manifest, &self.current, &self.annotations, &self.search);
        let mut events = self.gallery.load(&ctx);
        events.extend(self.gallery.update(gallery::Message::Resized(area), &ctx));
        self.handle_gallery_events(events)
    }

    fn set_current(&mut self, id: CanvasId) {
        if self.current.as_ref() != Some(&id) {
            log::debug!("Current canvas: {id}");
            self.current = Some(id);
        }
    }

    fn forward_gallery_size(&mut self) -> Task<Message> {
        let size = self.gallery_area();
        self.update(Message::Gallery(gallery::Message::Resized(size)))
    }

    /// Space left for the gallery scrollable after the panels.
    pub(super) fn gallery_area(&self) -> Size {
        let layout =
            control_panel::Layout::for_width(self.window_size.width, self.config.control_panel.variant);
        let panel = layout.thickness().unwrap_or(CONTROL_PANEL_THICKNESS);
        let sidebar = if self.config.sidebar.open {
            sizing::SIDEBAR_WIDTH
        } else {
            0.0
        };

        let (width, height) = match layout.orientation {
            Orientation::Horizontal => (self.window_size.width - sidebar, self.window_size.height - panel),
            Orientation::Vertical => (self.window_size.width - panel - sidebar, self.window_size.height),
        };
        Size::new(width.max(0.0), (height - GALLERY_HEADER_HEIGHT).max(0.0))
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            log::warn!("Failed to save config: {err}");
            self.status = Some(err.i18n_key().to_string());
        }
    }
}
