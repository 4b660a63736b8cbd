// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the gallery, the index sidebar and the control
panel. Styles in [`crate::ui::styles`] and the component views read these
instead of hard-coding values.

- **Palette**: base colors, plus the two badge colors of a gallery tile
- **Opacity**: overlay and surface alpha levels
- **Spacing**: 4px based spacing scale
- **Sizing**: fixed component dimensions
- **Typography**: font size scale
- **Border**, **Radius**, **Shadow**: frame decoration

```
use iiif_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let tint = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::SEARCH_500
};
let gap = spacing::XS; // between tiles
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Search match chip and search hit tint.
    pub const SEARCH_500: Color = Color::from_rgb(1.0, 0.757, 0.027);
    /// Annotation count chip.
    pub const ANNOTATION_500: Color = Color::from_rgb(0.31, 0.49, 0.71);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Tint behind tiles that match the search.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Tooltip bubbles.
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Panels (control panel, index sidebar)
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Height of a text button, also used for the gallery search row.
    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const SIDEBAR_WIDTH: f32 = 240.0;
    pub const SEARCH_WIDTH: f32 = 280.0;

    /// Height reserved under a gallery thumbnail for its label.
    pub const TILE_LABEL_HEIGHT: f32 = 20.0;
    /// Outline drawn around the current tile.
    pub const TILE_SELECTED_OUTLINE: f32 = 2.0;
}

pub mod typography {
    //! Font size scale.

    /// Control panel glyphs
    pub const TITLE_MD: f32 = 20.0;

    /// Sidebar heading
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Search hits, status messages
    pub const BODY_SM: f32 = 13.0;

    /// Badges, thumbnail labels, tooltips
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    /// Pill shaped badges.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_HOVER);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Badge chips must fit on the label row of the smallest tile.
    assert!(typography::CAPTION <= sizing::TILE_LABEL_HEIGHT);
};
