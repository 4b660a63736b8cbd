// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the index
//! sidebar and the control panel.
//!
//! The `App` owns the selection (the current canvas), the annotation store
//! and the search results. Components only emit events; this module turns
//! them into state changes and side effects such as manifest loading,
//! annotation requests and config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::annotations::{AnnotationStore, SearchHits};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::manifest::{self, Canvas, CanvasId, Manifest};
use crate::ui::gallery::{self, TileConfig};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// What the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Gallery,
    /// The current canvas on its own.
    Canvas,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory config is saved to, `None` for the default location.
    config_dir: Option<PathBuf>,
    manifest: Option<Manifest>,
    gallery: gallery::State,
    annotations: AnnotationStore,
    search: SearchHits,
    current: Option<CanvasId>,
    view_mode: ViewMode,
    theme: AppTheme,
    window_size: Size,
    loading: bool,
    /// i18n key of the message shown in the status bar.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view_mode", &self.view_mode)
            .field("current", &self.current)
            .field(
                "canvases",
                &self.manifest.as_ref().map(|m| m.canvases.len()),
            )
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, Config::default(), None)
    }
}

impl App {
    /// Loads the config and, if one was given, starts loading the manifest.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let mut app = Self::with_config(flags.lang, config, None);
        app.status = warning;

        let task = match flags.manifest_path {
            Some(path) => app.load_manifest(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the application from an already loaded config.
    ///
    /// `config_dir` redirects config saves, `None` uses the default location.
    pub fn with_config(lang: Option<String>, config: Config, config_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(lang, &config);
        let theme = AppTheme::new(config.general.theme_mode);

        Self {
            i18n,
            gallery: gallery::State::new(TileConfig::from(&config.gallery)),
            annotations: AnnotationStore::new(config.gallery.annotations),
            search: SearchHits::default(),
            manifest: None,
            current: None,
            view_mode: ViewMode::Gallery,
            theme,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            loading: false,
            status: None,
            config,
            config_dir,
        }
    }

    fn load_manifest(&mut self, path: PathBuf) -> Task<Message> {
        log::info!("Loading manifest {}", path.display());
        self.loading = true;
        Task::perform(manifest::load_async(path), Message::ManifestLoaded)
    }

    fn title(&self) -> String {
        let locale = self.i18n.current_locale().to_string();
        match self
            .manifest
            .as_ref()
            .and_then(|manifest| manifest.label.best(&locale))
        {
            Some(label) => self
                .i18n
                .tr_with_args("window-title-with-manifest", &[("label", label)]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    #[must_use]
    pub fn current(&self) -> Option<&CanvasId> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    #[must_use]
    pub fn search(&self) -> &SearchHits {
        &self.search
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn canvases(&self) -> &[Canvas] {
        canvases(&self.manifest)
    }

    fn current_canvas(&self) -> Option<&Canvas> {
        let id = self.current.as_ref()?;
        self.manifest.as_ref()?.canvas(id)
    }
}

fn canvases(manifest: &Option<Manifest>) -> &[Canvas] {
    manifest
        .as_ref()
        .map_or(&[][..], |manifest| manifest.canvases.as_slice())
}

/// Borrows the parts of the app the gallery reads, field by field, so the
/// gallery itself can be borrowed mutably at the same time.
fn gallery_context<'a>(
    manifest: &'a Option<Manifest>,
    current: &'a Option<CanvasId>,
    annotations: &'a AnnotationStore,
    search: &'a SearchHits,
) -> gallery::Context<'a> {
    gallery::Context {
        canvases: canvases(manifest),
        current: current.as_ref(),
        annotations,
        search,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::control_panel;
    use crate::ui::gallery::tile;
    use iced::keyboard::key::{Key, Named};
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "@context": "http://iiif.io/api/presentation/3/context.json",
        "id": "https://example.org/manifest",
        "type": "Manifest",
        "label": { "en": ["Book of hours"] },
        "items": [
            {
                "id": "https://example.org/canvas/1",
                "type": "Canvas",
                "width": 1500,
                "height": 1000,
                "annotations": [{
                    "type": "AnnotationPage",
                    "items": [
                        { "id": "a1", "type": "Annotation", "body": { "type": "TextualBody", "value": "A dog" } },
                        { "id": "a2", "type": "Annotation", "body": { "type": "TextualBody", "value": "A cat" } }
                    ]
                }]
            },
            {
                "id": "https://example.org/canvas/2",
                "type": "Canvas",
                "width": 1000,
                "height": 1000
            }
        ]
    }"#;

    fn app(annotations: bool) -> (App, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = Config::default();
        config.gallery.annotations = annotations;
        let app = App::with_config(
            Some("en-US".to_string()),
            config,
            Some(dir.path().to_path_buf()),
        );
        (app, dir)
    }

    fn loaded(annotations: bool) -> (App, TempDir) {
        let (mut app, dir) = app(annotations);
        let manifest = manifest::from_json(MANIFEST, None).expect("valid manifest");
        let _ = app.update(Message::ManifestLoaded(Ok(manifest)));
        (app, dir)
    }

    fn canvas_id(n: usize) -> CanvasId {
        CanvasId::new(format!("https://example.org/canvas/{n}"))
    }

    #[test]
    fn title_shows_app_name_without_manifest() {
        let (app, _dir) = app(true);
        assert_eq!(app.title(), "IIIF Gallery");
    }

    #[test]
    fn title_shows_manifest_label() {
        let (app, _dir) = loaded(true);
        assert_eq!(app.title(), "Book of hours - IIIF Gallery");
    }

    #[test]
    fn title_keeps_numeric_label_text() {
        let (mut app, _dir) = app(true);
        let json = MANIFEST.replace("Book of hours", "007");
        let manifest = manifest::from_json(&json, None).expect("valid manifest");
        let _ = app.update(Message::ManifestLoaded(Ok(manifest)));
        assert_eq!(app.title(), "007 - IIIF Gallery");
    }

    #[test]
    fn loading_a_manifest_selects_first_canvas() {
        let (app, _dir) = loaded(true);
        assert_eq!(app.current(), Some(&canvas_id(1)));
        assert_eq!(app.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn failed_load_shows_error_status() {
        let (mut app, _dir) = app(true);
        let error = crate::error::Error::Io("missing".to_string());
        let _ = app.update(Message::ManifestLoaded(Err(error)));
        assert_eq!(app.status(), Some("error-load-manifest-io"));
        let _ = app.update(Message::DismissStatus);
        assert_eq!(app.status(), None);
    }

    #[test]
    fn annotation_request_marks_canvas_pending() {
        let (mut app, _dir) = loaded(true);
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            1,
            tile::Message::IntersectionChanged {
                is_intersecting: true,
            },
        )));
        assert!(app.annotations().is_pending(&canvas_id(2)));

        let generation = app.annotations().generation();
        let _ = app.update(Message::AnnotationsLoaded {
            generation,
            id: canvas_id(2),
            count: 0,
        });
        assert!(!app.annotations().is_pending(&canvas_id(2)));
        assert_eq!(app.annotations().count(&canvas_id(2)), Some(0));
    }

    #[test]
    fn late_count_from_previous_manifest_is_dropped() {
        let (mut app, _dir) = app(true);
        let mut first = manifest::from_json(MANIFEST, None).expect("valid manifest");
        let annotated = first.canvases[1].clone().with_annotations(vec![
            manifest::Annotation {
                id: Some("b1".to_string()),
                text: Some("A bird".to_string()),
            },
            manifest::Annotation {
                id: Some("b2".to_string()),
                text: Some("A fish".to_string()),
            },
        ]);
        first.canvases[1] = annotated;
        let _ = app.update(Message::ManifestLoaded(Ok(first)));
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            1,
            tile::Message::IntersectionChanged {
                is_intersecting: true,
            },
        )));
        assert!(app.annotations().is_pending(&canvas_id(2)));
        let first_generation = app.annotations().generation();

        // Same canvas ids, but canvas 2 has no annotations here.
        let second = manifest::from_json(MANIFEST, None).expect("valid manifest");
        let _ = app.update(Message::ManifestLoaded(Ok(second)));
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            1,
            tile::Message::IntersectionChanged {
                is_intersecting: true,
            },
        )));

        let _ = app.update(Message::AnnotationsLoaded {
            generation: first_generation,
            id: canvas_id(2),
            count: 2,
        });
        assert_ne!(app.annotations().count(&canvas_id(2)), Some(2));
        assert!(app.annotations().is_pending(&canvas_id(2)));

        let generation = app.annotations().generation();
        let _ = app.update(Message::AnnotationsLoaded {
            generation,
            id: canvas_id(2),
            count: 0,
        });
        assert_eq!(app.annotations().count(&canvas_id(2)), Some(0));
    }

    #[test]
    fn annotation_request_is_noop_when_disabled() {
        let (mut app, _dir) = loaded(false);
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            0,
            tile::Message::IntersectionChanged {
                is_intersecting: true,
            },
        )));
        assert!(!app.annotations().is_pending(&canvas_id(1)));
        assert_eq!(app.annotations().count(&canvas_id(1)), None);
    }

    #[test]
    fn pressing_current_tile_opens_single_canvas_view() {
        let (mut app, _dir) = loaded(true);
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            0,
            tile::Message::Pressed,
        )));
        assert_eq!(app.view_mode(), ViewMode::Canvas);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
        assert_eq!(app.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn pressing_other_tile_selects_it() {
        let (mut app, _dir) = loaded(true);
        let _ = app.update(Message::Gallery(gallery::Message::Tile(
            1,
            tile::Message::Pressed,
        )));
        assert_eq!(app.current(), Some(&canvas_id(2)));
        assert_eq!(app.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn search_updates_hits() {
        let (mut app, _dir) = loaded(true);
        let _ = app.update(Message::Gallery(gallery::Message::SearchChanged(
            "DOG".to_string(),
        )));
        assert_eq!(app.search().count(0), 1);
        assert_eq!(app.search().count(1), 0);
    }

    #[test]
    fn sidebar_selection_sets_current() {
        let (mut app, _dir) = loaded(true);
        let _ = app.update(Message::Sidebar(crate::ui::sidebar_index::Message::Select(
            canvas_id(2),
        )));
        assert_eq!(app.current(), Some(&canvas_id(2)));
    }

    #[test]
    fn control_panel_changes_are_persisted() {
        let (mut app, dir) = app(true);
        let _ = app.update(Message::ControlPanel(control_panel::Message::ToggleIndex));
        let _ = app.update(Message::ControlPanel(control_panel::Message::ToggleTheme));
        assert!(!app.config().sidebar.open);

        let saved = config::load_from_path(&dir.path().join("settings.toml"))
            .expect("config was written");
        assert!(!saved.sidebar.open);
        assert_eq!(saved.general.theme_mode, app.theme_mode());
        assert_ne!(saved.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn cycle_language_switches_translations() {
        let (mut app, _dir) = app(true);
        let _ = app.update(Message::ControlPanel(
            control_panel::Message::CycleLanguage,
        ));
        assert_eq!(app.config().general.language.as_deref(), Some("de"));
        assert_ne!(app.i18n.tr("gallery-back"), "Back to gallery");
    }
}
