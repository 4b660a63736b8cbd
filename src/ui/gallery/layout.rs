// SPDX-License-Identifier: MPL-2.0
//! Row-wrapping layout for gallery tiles.
//!
//! Tiles are placed left to right and wrap onto a new row when the next one
//! would overflow the available width. Every tile in a row shares the row's
//! top edge; the row height is that of its tallest tile.
//!
//! The gallery view renders exactly these rows, so the rectangles computed
//! here are also what the visibility watcher tests against the viewport.

use crate::ui::design_tokens::{sizing, spacing};
use iced::{Rectangle, Size};
use std::ops::Range;

/// Padding inside a tile's frame, around thumbnail and label.
pub const TILE_PADDING: f32 = spacing::XXS;

/// Gap between tiles, horizontally and vertically.
pub const TILE_SPACING: f32 = spacing::XS;

/// Padding between the scrollable edge and the first row/column.
pub const CONTENT_PADDING: f32 = spacing::MD;

/// Outer size of a tile whose thumbnail is `thumbnail` large.
#[must_use]
pub fn tile_outer_size(thumbnail: Size) -> Size {
    Size::new(
        thumbnail.width + 2.0 * TILE_PADDING,
        thumbnail.height + sizing::TILE_LABEL_HEIGHT + 2.0 * TILE_PADDING,
    )
}

/// Tile positions in content coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayout {
    /// One rectangle per tile, in input order.
    pub regions: Vec<Rectangle>,
    /// Tile index ranges, one per row.
    pub rows: Vec<Range<usize>>,
    /// Total height including bottom padding.
    pub content_height: f32,
}

/// Lays out tiles of the given sizes into rows no wider than `available_width`.
///
/// A tile wider than the available width still gets a row of its own.
#[must_use]
pub fn flow(sizes: &[Size], available_width: f32) -> FlowLayout {
    let usable_width = (available_width - 2.0 * CONTENT_PADDING).max(0.0);

    let mut regions = Vec::with_capacity(sizes.len());
    let mut rows = Vec::new();

    let mut row_start = 0;
    let mut x = 0.0_f32;
    let mut y = CONTENT_PADDING;
    let mut row_height = 0.0_f32;

    for (index, size) in sizes.iter().enumerate() {
        let needed = if index == row_start {
            size.width
        } else {
            x + TILE_SPACING + size.width
        };

        if index > row_start && needed > usable_width {
            rows.push(row_start..index);
            y += row_height + TILE_SPACING;
            row_start = index;
            x = 0.0;
            row_height = 0.0;
        }

        let left = if index == row_start {
            0.0
        } else {
            x + TILE_SPACING
        };
        regions.push(Rectangle {
            x: CONTENT_PADDING + left,
            y,
            width: size.width,
            height: size.height,
        });
        x = left + size.width;
        row_height = row_height.max(size.height);
    }

    let content_height = if sizes.is_empty() {
        2.0 * CONTENT_PADDING
    } else {
        rows.push(row_start..sizes.len());
        y + row_height + CONTENT_PADDING
    };

    FlowLayout {
        regions,
        rows,
        content_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_wrap_when_row_is_full() {
        // Usable width: 400 - 32 = 368, fits three 100px tiles plus gaps.
        let sizes = vec![Size::new(100.0, 120.0); 5];
        let layout = flow(&sizes, 400.0);

        assert_eq!(layout.rows, vec![0..3, 3..5]);
        assert_eq!(layout.regions[0].x, CONTENT_PADDING);
        assert_eq!(layout.regions[1].x, CONTENT_PADDING + 100.0 + TILE_SPACING);
        assert_eq!(layout.regions[3].x, CONTENT_PADDING);
        assert_eq!(
            layout.regions[3].y,
            CONTENT_PADDING + 120.0 + TILE_SPACING
        );
    }

    #[test]
    fn row_height_is_tallest_tile() {
        let sizes = vec![
            Size::new(50.0, 80.0),
            Size::new(50.0, 140.0),
            Size::new(300.0, 60.0),
        ];
        let layout = flow(&sizes, 200.0);

        assert_eq!(layout.rows, vec![0..2, 2..3]);
        assert_eq!(layout.regions[2].y, CONTENT_PADDING + 140.0 + TILE_SPACING);
    }

    #[test]
    fn oversized_tile_gets_its_own_row() {
        let sizes = vec![Size::new(1000.0, 100.0), Size::new(10.0, 10.0)];
        let layout = flow(&sizes, 300.0);
        assert_eq!(layout.rows, vec![0..1, 1..2]);
    }

    #[test]
    fn empty_input_has_only_padding() {
        let layout = flow(&[], 300.0);
        assert!(layout.regions.is_empty());
        assert!(layout.rows.is_empty());
        assert_eq!(layout.content_height, 2.0 * CONTENT_PADDING);
    }

    #[test]
    fn outer_size_adds_label_and_padding() {
        let outer = tile_outer_size(Size::new(150.0, 100.0));
        assert_eq!(outer.width, 150.0 + 2.0 * TILE_PADDING);
        assert_eq!(
            outer.height,
            100.0 + sizing::TILE_LABEL_HEIGHT + 2.0 * TILE_PADDING
        );
    }
}
