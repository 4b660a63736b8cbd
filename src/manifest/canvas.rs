// SPDX-License-Identifier: MPL-2.0
//! Canvas model: one page of a IIIF manifest.
//!
//! Canvases are validated when they are built, so every `Canvas` in the
//! application has a non-empty identifier and strictly positive dimensions.
//! Layout code can read [`Canvas::aspect_ratio`] without guarding against
//! zero or missing sizes.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when building a canvas from untrusted data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas identifier is empty")]
    EmptyId,
    #[error("canvas has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },
}

/// Identifier of a canvas (the IIIF `id` / `@id` URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanvasId(String);

impl CanvasId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A language-tagged label.
///
/// IIIF v3 labels are language maps; v2 labels are plain strings or
/// `@value`/`@language` objects. Both are normalized into `(language, text)`
/// pairs, with `None` standing for "no language".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    values: Vec<(Option<String>, String)>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            values: vec![(None, text.into())],
        }
    }

    pub fn push(&mut self, language: Option<String>, text: impl Into<String>) {
        self.values.push((language, text.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Picks the best value for `language` (a BCP-47 tag such as `en-US`).
    ///
    /// Preference: exact tag, then primary subtag (`en`), then untagged, then
    /// the first value.
    #[must_use]
    pub fn best(&self, language: &str) -> Option<&str> {
        let primary = primary_subtag(language);

        self.find(|lang| lang.is_some_and(|l| l.eq_ignore_ascii_case(language)))
            .or_else(|| {
                self.find(|lang| lang.is_some_and(|l| primary_subtag(l).eq_ignore_ascii_case(primary)))
            })
            .or_else(|| self.find(|lang| matches!(lang, None | Some("none"))))
            .or_else(|| self.values.first().map(|(_, text)| text.as_str()))
    }

    fn find(&self, mut pred: impl FnMut(Option<&str>) -> bool) -> Option<&str> {
        self.values
            .iter()
            .find(|(lang, _)| pred(lang.as_deref()))
            .map(|(_, text)| text.as_str())
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Where a canvas thumbnail comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSource {
    /// Image file on disk, resolved against the manifest location.
    Local(PathBuf),
    /// Remote image service. Not fetched; rendered as a placeholder.
    Remote(String),
}

/// An annotation embedded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    pub id: Option<String>,
    /// Textual body, if the annotation has one.
    pub text: Option<String>,
}

/// A validated canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    id: CanvasId,
    index: usize,
    width: u32,
    height: u32,
    pub label: Label,
    pub thumbnail: Option<ThumbnailSource>,
    pub annotations: Vec<Annotation>,
}

impl Canvas {
    /// Builds a canvas, rejecting empty ids and zero dimensions.
    pub fn new(
        id: impl Into<String>,
        index: usize,
        width: u64,
        height: u64,
    ) -> Result<Self, CanvasError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CanvasError::EmptyId);
        }
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(CanvasError::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        Ok(Self {
            id: CanvasId(id),
            index,
            width: w,
            height: h,
            label: Label::default(),
            thumbnail: None,
            annotations: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: ThumbnailSource) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn id(&self) -> &CanvasId {
        &self.id
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height of the backing resource.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Number of annotations embedded for this canvas.
    #[must_use]
    pub fn annotation_count(&self) -> u32 {
        u32::try_from(self.annotations.len()).unwrap_or(u32::MAX)
    }

    /// Counts annotations whose text contains `query`, ignoring case.
    /// A blank query matches nothing.
    #[must_use]
    pub fn count_matches(&self, query: &str) -> u32 {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0;
        }
        let count = self
            .annotations
            .iter()
            .filter_map(|annotation| annotation.text.as_deref())
            .filter(|text| text.to_lowercase().contains(&query))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(text: &str) -> Annotation {
        Annotation {
            id: None,
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn new_rejects_empty_id() {
        assert_eq!(Canvas::new("  ", 0, 10, 10), Err(CanvasError::EmptyId));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Canvas::new("c1", 0, 0, 10),
            Err(CanvasError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(Canvas::new("c1", 0, 10, 0).is_err());
    }

    #[test]
    fn new_rejects_oversized_dimensions() {
        assert!(Canvas::new("c1", 0, u64::MAX, 10).is_err());
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let canvas = Canvas::new("c1", 0, 1500, 1000).expect("valid canvas");
        assert_eq!(canvas.aspect_ratio(), 1.5);
    }

    #[test]
    fn count_matches_ignores_case_and_blank_queries() {
        let canvas = Canvas::new("c1", 0, 10, 10)
            .expect("valid canvas")
            .with_annotations(vec![
                annotation("Berlin, Stadtplan"),
                annotation("berliner Mauer"),
                annotation("Hamburg"),
                Annotation::default(),
            ]);

        assert_eq!(canvas.count_matches("BERLIN"), 2);
        assert_eq!(canvas.count_matches("hamburg"), 1);
        assert_eq!(canvas.count_matches("   "), 0);
        assert_eq!(canvas.annotation_count(), 4);
    }

    #[test]
    fn label_prefers_exact_then_primary_then_untagged() {
        let mut label = Label::default();
        label.push(Some("de".into()), "Seite 1");
        label.push(Some("en".into()), "Page 1");
        label.push(None, "1");

        assert_eq!(label.best("de"), Some("Seite 1"));
        assert_eq!(label.best("en-US"), Some("Page 1"));
        assert_eq!(label.best("fr"), Some("1"));
    }

    #[test]
    fn label_falls_back_to_first_value() {
        let mut label = Label::default();
        label.push(Some("de".into()), "Seite 1");
        assert_eq!(label.best("fr"), Some("Seite 1"));
        assert_eq!(Label::default().best("fr"), None);
    }
}
