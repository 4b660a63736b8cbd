// SPDX-License-Identifier: MPL-2.0
//! Viewport visibility tracking for laid-out items.
//!
//! [`Watcher`] plays the role of an intersection observer: given the
//! content-space rectangles of a list of items and the currently visible
//! region, it reports every item whose visibility differs from what was
//! last reported. The first observation of an item is always reported.

use iced::Rectangle;

/// Visibility transition of one observed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionChange {
    pub index: usize,
    pub is_intersecting: bool,
}

/// Remembers the last reported visibility of each item.
#[derive(Debug, Clone, Default)]
pub struct Watcher {
    observed: Vec<Option<bool>>,
}

impl Watcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything; the next observation reports every item again.
    pub fn reset(&mut self) {
        self.observed.clear();
    }

    /// Compares `regions` against `viewport` and returns the changes since
    /// the previous call, in item order.
    pub fn observe(
        &mut self,
        regions: &[Rectangle],
        viewport: &Rectangle,
    ) -> Vec<IntersectionChange> {
        self.observed.resize(regions.len(), None);

        let mut changes = Vec::new();
        for (index, (region, last)) in regions.iter().zip(self.observed.iter_mut()).enumerate() {
            let is_intersecting = intersects(region, viewport);
            if *last != Some(is_intersecting) {
                *last = Some(is_intersecting);
                changes.push(IntersectionChange {
                    index,
                    is_intersecting,
                });
            }
        }
        changes
    }
}

/// Whether the two rectangles share a non-empty area.
///
/// Touching edges do not count, and an empty viewport sees nothing.
#[must_use]
pub fn intersects(region: &Rectangle, viewport: &Rectangle) -> bool {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return false;
    }
    region.x < viewport.x + viewport.width
        && viewport.x < region.x + region.width
        && region.y < viewport.y + viewport.height
        && viewport.y < region.y + region.height
}
