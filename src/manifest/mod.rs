// SPDX-License-Identifier: MPL-2.0
//! IIIF Presentation manifest loading.
//!
//! Both Presentation API 3 (`items`) and 2 (`sequences[0].canvases`) documents
//! are accepted. Only what the gallery needs is extracted: canvas ids, sizes,
//! labels, thumbnails and embedded annotations. Annotation lists referenced by
//! URL are not fetched.
//!
//! # Examples
//!
//! ```
//! use iiif_gallery::manifest;
//!
//! let json = r#"{
//!     "type": "Manifest",
//!     "items": [
//!         { "id": "https://example.org/c1", "type": "Canvas", "width": 1500, "height": 1000 }
//!     ]
//! }"#;
//! let manifest = manifest::from_json(json, None).unwrap();
//! assert_eq!(manifest.canvases.len(), 1);
//! assert_eq!(manifest.canvases[0].aspect_ratio(), 1.5);
//! ```

mod canvas;

pub use canvas::{Annotation, Canvas, CanvasError, CanvasId, Label, ThumbnailSource};

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error("document is neither a IIIF v2 nor v3 manifest")]
    Unsupported,
    #[error("manifest has no canvases")]
    NoCanvases,
    #[error("canvas #{index} is invalid: {source}")]
    InvalidCanvas { index: usize, source: CanvasError },
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Json(_) => "error-load-manifest-json",
            ManifestError::Unsupported => "error-load-manifest-unsupported",
            ManifestError::NoCanvases => "error-load-manifest-empty",
            ManifestError::InvalidCanvas { .. } => "error-load-manifest-canvas",
        }
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::Json(err.to_string())
    }
}

/// A parsed manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub id: Option<String>,
    pub label: Label,
    pub canvases: Vec<Canvas>,
    /// File the manifest was read from, if any.
    pub source: Option<PathBuf>,
}

impl Manifest {
    #[must_use]
    pub fn canvas(&self, id: &CanvasId) -> Option<&Canvas> {
        self.canvases.iter().find(|canvas| canvas.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: &CanvasId) -> Option<usize> {
        self.canvases.iter().position(|canvas| canvas.id() == id)
    }
}

/// Reads and parses a manifest file.
pub fn load_from_path(path: &Path) -> crate::error::Result<Manifest> {
    let content = std::fs::read_to_string(path)?;
    let mut manifest = from_json(&content, path.parent())?;
    manifest.source = Some(path.to_path_buf());
    Ok(manifest)
}

/// Async variant of [`load_from_path`] for use from an Iced `Task`.
pub async fn load_async(path: PathBuf) -> crate::error::Result<Manifest> {
    let content = tokio::fs::read_to_string(&path).await?;
    let mut manifest = from_json(&content, path.parent())?;
    manifest.source = Some(path);
    Ok(manifest)
}

/// Parses a manifest document.
///
/// `base_dir` is used to resolve relative thumbnail paths.
pub fn from_json(json: &str, base_dir: Option<&Path>) -> Result<Manifest, ManifestError> {
    let doc: Value = serde_json::from_str(json)?;

    let raw_canvases: &[Value] = if let Some(items) = doc.get("items").and_then(Value::as_array) {
        items
    } else if let Some(canvases) = doc
        .get("sequences")
        .and_then(Value::as_array)
        .and_then(|sequences| sequences.first())
        .and_then(|sequence| sequence.get("canvases"))
        .and_then(Value::as_array)
    {
        canvases
    } else {
        return Err(ManifestError::Unsupported);
    };

    if raw_canvases.is_empty() {
        return Err(ManifestError::NoCanvases);
    }

    let canvases = raw_canvases
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_canvas(index, raw, base_dir))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest {
        id: id_of(&doc).map(str::to_string),
        label: doc.get("label").map(parse_label).unwrap_or_default(),
        canvases,
        source: None,
    })
}

fn parse_canvas(index: usize, raw: &Value, base_dir: Option<&Path>) -> Result<Canvas, ManifestError> {
    let id = id_of(raw).unwrap_or_default();
    let width = dimension(raw, "width");
    let height = dimension(raw, "height");

    let canvas = Canvas::new(id, index, width, height)
        .map_err(|source| ManifestError::InvalidCanvas { index, source })?
        .with_label(raw.get("label").map(parse_label).unwrap_or_default())
        .with_annotations(parse_annotations(raw));

    Ok(match raw.get("thumbnail").and_then(|t| parse_thumbnail(t, base_dir)) {
        Some(thumbnail) => canvas.with_thumbnail(thumbnail),
        None => canvas,
    })
}

/// `id` (v3) or `@id` (v2).
fn id_of(value: &Value) -> Option<&str> {
    value
        .get("id")
        .or_else(|| value.get("@id"))
        .and_then(Value::as_str)
}

fn dimension(raw: &Value, key: &str) -> u64 {
    match raw.get(key) {
        Some(value) => value
            .as_u64()
            .or_else(|| value.as_f64().filter(|v| v.is_finite() && *v > 0.0).map(|v| v.round() as u64))
            .unwrap_or(0),
        None => 0,
    }
}

fn parse_label(value: &Value) -> Label {
    let mut label = Label::default();
    collect_label(value, &mut label);
    label
}

fn collect_label(value: &Value, label: &mut Label) {
    match value {
        Value::String(text) => label.push(None, text.clone()),
        Value::Array(values) => values.iter().for_each(|v| collect_label(v, label)),
        Value::Object(map) => {
            if let Some(text) = map.get("@value").and_then(Value::as_str) {
                let language = map.get("@language").and_then(Value::as_str).map(str::to_string);
                label.push(language, text);
                return;
            }
            // v3 language map
            for (language, texts) in map {
                let language = (language != "none").then(|| language.clone());
                for text in texts.as_array().into_iter().flatten().filter_map(Value::as_str) {
                    label.push(language.clone(), text);
                }
            }
        }
        _ => {}
    }
}

fn parse_thumbnail(value: &Value, base_dir: Option<&Path>) -> Option<ThumbnailSource> {
    let reference = match value {
        Value::String(s) => s.as_str(),
        Value::Array(values) => return values.iter().find_map(|v| parse_thumbnail(v, base_dir)),
        Value::Object(_) => id_of(value)?,
        _ => return None,
    };

    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(ThumbnailSource::Remote(reference.to_string()));
    }

    let path = PathBuf::from(reference.strip_prefix("file://").unwrap_or(reference));
    let resolved = match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    };
    Some(ThumbnailSource::Local(resolved))
}

fn parse_annotations(raw: &Value) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    // v3: annotations[] -> AnnotationPage.items[] -> Annotation.body
    for page in raw.get("annotations").and_then(Value::as_array).into_iter().flatten() {
        for item in page.get("items").and_then(Value::as_array).into_iter().flatten() {
            annotations.push(Annotation {
                id: id_of(item).map(str::to_string),
                text: item.get("body").and_then(body_text),
            });
        }
    }

    // v2: otherContent[] -> AnnotationList.resources[] -> resource.chars
    for list in raw.get("otherContent").and_then(Value::as_array).into_iter().flatten() {
        for item in list.get("resources").and_then(Value::as_array).into_iter().flatten() {
            annotations.push(Annotation {
                id: id_of(item).map(str::to_string),
                text: item.get("resource").and_then(body_text),
            });
        }
    }

    annotations
}

fn body_text(body: &Value) -> Option<String> {
    match body {
        Value::Array(bodies) => {
            let texts: Vec<String> = bodies.iter().filter_map(body_text).collect();
            (!texts.is_empty()).then(|| texts.join(" "))
        }
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("chars"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
