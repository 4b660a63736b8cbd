// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the gallery scrollable's bounds and scroll offset, and exposes the
//! part of the content that is currently on screen.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,

    /// Previous viewport bounds (for layout change detection)
    pub previous_bounds: Option<Rectangle>,

    /// Whether `bounds` came from the scrollable itself.
    measured: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            previous_bounds: None,
            measured: false,
        }
    }
}

/// Width change (in pixels) below which the tile flow is not recomputed.
const REFLOW_THRESHOLD: f32 = 0.5;

impl ViewportState {
    /// Resets the scroll offset to zero (a new manifest starts at the top).
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Updates the viewport state with new bounds and offset.
    /// Returns true if the width changed enough to move tiles between rows.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.offset = offset;
        self.measured = true;
        self.set_bounds(bounds)
    }

    /// Seeds the viewport from a window size before the scrollable has
    /// reported its own bounds. Real bounds always win afterwards.
    pub fn seed(&mut self, size: Size) -> bool {
        if self.measured {
            return false;
        }
        self.set_bounds(Rectangle::new(Point::ORIGIN, size))
    }

    fn set_bounds(&mut self, bounds: Rectangle) -> bool {
        self.previous_bounds = self.bounds;
        self.bounds = Some(bounds);

        match self.previous_bounds {
            Some(prev) => (prev.width - bounds.width).abs() > REFLOW_THRESHOLD,
            None => true,
        }
    }

    /// Width available to the content, if known.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.bounds.map(|bounds| bounds.width)
    }

    /// The region of the content currently on screen, in content coordinates.
    ///
    /// Returns `None` until bounds are known.
    #[must_use]
    pub fn visible_rect(&self) -> Option<Rectangle> {
        let bounds = self.bounds?;
        Some(Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: bounds.width,
            height: bounds.height,
        })
    }
}
