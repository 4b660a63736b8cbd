// SPDX-License-Identifier: MPL-2.0
//! Per-canvas annotation counts and annotation search.
//!
//! The store answers the question gallery tiles ask on every render: how
//! many annotations does this canvas have? The answer is `None` when lazy
//! annotation loading is disabled. Otherwise it is the loaded count, or zero
//! until the canvas has been loaded, which is what makes a tile request it.
//!
//! Each manifest load starts a new generation. A count that arrives for an
//! older generation belongs to a manifest that is no longer shown and is
//! dropped.

use crate::manifest::{Canvas, CanvasId};
use std::collections::{HashMap, HashSet};

/// Annotation counts of the canvases loaded so far.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    enabled: bool,
    counts: HashMap<CanvasId, u32>,
    pending: HashSet<CanvasId>,
    generation: u64,
}

impl AnnotationStore {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Generation that requests made now belong to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count shown on the canvas tile.
    #[must_use]
    pub fn count(&self, id: &CanvasId) -> Option<u32> {
        self.enabled
            .then(|| self.counts.get(id).copied().unwrap_or(0))
    }

    /// Records a request. Returns `false` when the canvas is already loaded
    /// or being loaded, or when loading is disabled.
    pub fn mark_requested(&mut self, id: &CanvasId) -> bool {
        if !self.enabled || self.counts.contains_key(id) {
            return false;
        }
        self.pending.insert(id.clone())
    }

    #[must_use]
    pub fn is_pending(&self, id: &CanvasId) -> bool {
        self.pending.contains(id)
    }

    /// Stores the loaded count of a canvas requested in `generation`.
    ///
    /// Returns `false` and keeps the store unchanged when the result is
    /// from an older generation or the canvas was never requested.
    pub fn resolve(&mut self, generation: u64, id: CanvasId, count: u32) -> bool {
        if generation != self.generation || !self.pending.remove(&id) {
            return false;
        }
        self.counts.insert(id, count);
        true
    }

    /// Forgets everything, e.g. when another manifest is opened.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.pending.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Loads the annotation count of a canvas.
///
/// Annotations are embedded in the manifest, so this only counts them; it
/// runs as a task so the gallery stays responsive on very large canvases.
pub async fn count_embedded(canvas: Canvas) -> (CanvasId, u32) {
    let count = canvas.annotation_count();
    (canvas.id().clone(), count)
}

/// Number of annotations matching the search query, per canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHits {
    query: String,
    counts: Vec<u32>,
}

impl SearchHits {
    /// Runs `query` over all canvases. Blank queries match nothing.
    #[must_use]
    pub fn new(query: &str, canvases: &[Canvas]) -> Self {
        let query = query.trim().to_string();
        let counts = if query.is_empty() {
            Vec::new()
        } else {
            canvases
                .iter()
                .map(|canvas| canvas.count_matches(&query))
                .collect()
        };
        Self { query, counts }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hits on the canvas at `index`; zero when there is no active search.
    #[must_use]
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Total number of hits over all canvases.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
