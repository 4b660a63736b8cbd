// SPDX-License-Identifier: MPL-2.0
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use iiif_gallery::annotations::{AnnotationStore, SearchHits};
use iiif_gallery::app::{App, Message};
use iiif_gallery::config::{self, Config};
use iiif_gallery::i18n::fluent::I18n;
use iiif_gallery::manifest::{self, CanvasId, Manifest};
use iiif_gallery::ui::gallery::{self, TileConfig};
use std::collections::HashMap;
use tempfile::tempdir;

/// A presentation 3 manifest with `count` landscape canvases, the first of
/// which carries one annotation.
fn manifest_json(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            let annotations = if i == 0 {
                r#", "annotations": [{ "type": "AnnotationPage", "items": [
                    { "id": "anno-0", "type": "Annotation",
                      "body": { "type": "TextualBody", "value": "Illuminated initial" } }
                ] }]"#
            } else {
                ""
            };
            format!(
                r#"{{ "id": "https://example.org/canvas/{i}", "type": "Canvas",
                     "label": {{ "en": ["f. {i}r"] }},
                     "width": 1500, "height": 1000{annotations} }}"#
            )
        })
        .collect();
    format!(
        r#"{{ "id": "https://example.org/manifest", "type": "Manifest",
             "label": {{ "en": ["Test codex"] }},
             "items": [{}] }}"#,
        items.join(",")
    )
}

fn load(count: usize) -> Manifest {
    manifest::from_json(&manifest_json(count), None).expect("valid manifest")
}

fn scrolled(y: f32) -> gallery::Message {
    gallery::Message::Scrolled {
        bounds: Rectangle::new(Point::ORIGIN, Size::new(800.0, 300.0)),
        offset: AbsoluteOffset { x: 0.0, y },
    }
}

/// Drives the gallery the way the application does and counts how often
/// each canvas asked for its annotations.
struct Harness {
    manifest: Manifest,
    gallery: gallery::State,
    annotations: AnnotationStore,
    search: SearchHits,
    requests: HashMap<CanvasId, usize>,
}

impl Harness {
    fn new(count: usize, enabled: bool) -> Self {
        Self {
            manifest: load(count),
            gallery: gallery::State::new(TileConfig::default()),
            annotations: AnnotationStore::new(enabled),
            search: SearchHits::default(),
            requests: HashMap::new(),
        }
    }

    fn start(&mut self) {
        let ctx = gallery::Context {
            canvases: &self.manifest.canvases,
            current: None,
            annotations: &self.annotations,
            search: &self.search,
        };
        let events = self.gallery.load(&ctx);
        self.apply(events);
    }

    fn send(&mut self, message: gallery::Message) {
        let ctx = gallery::Context {
            canvases: &self.manifest.canvases,
            current: None,
            annotations: &self.annotations,
            search: &self.search,
        };
        let events = self.gallery.update(message, &ctx);
        self.apply(events);
    }

    fn apply(&mut self, events: Vec<gallery::Event>) {
        for event in events {
            if let gallery::Event::RequestCanvasAnnotations(id) = event {
                *self.requests.entry(id.clone()).or_default() += 1;
                if self.annotations.mark_requested(&id) {
                    let count = self
                        .manifest
                        .canvas(&id)
                        .map_or(0, |canvas| canvas.annotation_count());
                    let generation = self.annotations.generation();
                    self.annotations.resolve(generation, id, count);
                }
            }
        }
    }
}

#[test]
fn scrolling_requests_each_canvas_once() {
    let mut harness = Harness::new(200, true);
    harness.start();

    let content_height = {
        harness.send(scrolled(0.0));
        harness.gallery.flow().content_height
    };
    assert!(content_height > 300.0, "the gallery must be scrollable");

    // Down to the bottom, then back up, twice.
    for _ in 0..2 {
        let mut y = 0.0;
        while y < content_height {
            harness.send(scrolled(y));
            y += 120.0;
        }
        while y > 0.0 {
            y -= 120.0;
            harness.send(scrolled(y.max(0.0)));
        }
    }

    assert_eq!(harness.requests.len(), 200, "every canvas was visible once");
    assert!(harness.requests.values().all(|&count| count == 1));

    let first = CanvasId::new("https://example.org/canvas/0");
    assert_eq!(harness.annotations.count(&first), Some(1));
}

#[test]
fn canvases_never_scrolled_to_are_not_requested() {
    let mut harness = Harness::new(200, true);
    harness.start();
    harness.send(scrolled(0.0));

    assert!(!harness.requests.is_empty());
    assert!(harness.requests.len() < 200);
    let last = CanvasId::new("https://example.org/canvas/199");
    assert!(!harness.requests.contains_key(&last));
}

#[test]
fn disabled_annotations_never_request() {
    let mut harness = Harness::new(50, false);
    harness.start();
    harness.send(scrolled(0.0));
    harness.send(scrolled(500.0));

    assert!(harness.requests.is_empty());
}

#[test]
fn reloading_manifest_requests_again() {
    let mut harness = Harness::new(10, true);
    harness.start();
    harness.send(scrolled(0.0));
    let first_round = harness.requests.len();
    assert!(first_round > 0);

    harness.annotations.clear();
    harness.start();
    harness.send(scrolled(0.0));
    assert!(harness.requests.values().all(|&count| count == 2));
    assert_eq!(harness.requests.len(), first_round);
}

#[test]
fn app_selects_canvas_from_gallery_and_index() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut app = App::with_config(
        Some("en-US".to_string()),
        Config::default(),
        Some(dir.path().to_path_buf()),
    );
    let _ = app.update(Message::ManifestLoaded(Ok(load(5))));
    assert_eq!(
        app.current(),
        Some(&CanvasId::new("https://example.org/canvas/0"))
    );

    let _ = app.update(Message::Gallery(gallery::Message::Tile(
        3,
        gallery::tile::Message::Pressed,
    )));
    assert_eq!(
        app.current(),
        Some(&CanvasId::new("https://example.org/canvas/3"))
    );

    let _ = app.update(Message::Sidebar(
        iiif_gallery::ui::sidebar_index::Message::Select(CanvasId::new(
            "https://example.org/canvas/1",
        )),
    ));
    assert_eq!(
        app.current(),
        Some(&CanvasId::new("https://example.org/canvas/1"))
    );
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("de".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "de");
    assert_eq!(i18n.tr("gallery-back"), "Zurück zur Galerie");

    // The command line wins over the config file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.tr("gallery-back"), "Back to gallery");
}
