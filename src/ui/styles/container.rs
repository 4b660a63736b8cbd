// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, sizing};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the control panel and index sidebar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Frame of a gallery tile.
///
/// The current canvas gets an outline in the brand color; tiles whose
/// canvas matches the active search get a tinted background.
pub fn tile(selected: bool, has_annotations: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = has_annotations.then(|| {
            Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::SEARCH_500
            })
        });
        let border = if selected {
            Border {
                color: theme.extended_palette().primary.strong.color,
                width: sizing::TILE_SELECTED_OUTLINE,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: sizing::TILE_SELECTED_OUTLINE,
                radius: radius::SM.into(),
            }
        };

        container::Style {
            background,
            border,
            ..Default::default()
        }
    }
}

/// Small pill-shaped counter drawn over a thumbnail.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in for thumbnails that cannot be rendered locally.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            color: palette.background.base.text,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, readable on any background.
pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status bar shown above the content when something went wrong.
pub fn status(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.danger.weak.color)),
        text_color: Some(palette.danger.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tile_has_visible_outline() {
        let style = tile(true, false)(&Theme::Light);
        assert_ne!(style.border.color, Color::TRANSPARENT);
        assert!(style.background.is_none());
    }

    #[test]
    fn search_hit_tile_is_tinted() {
        let style = tile(false, true)(&Theme::Dark);
        assert_eq!(style.border.color, Color::TRANSPARENT);
        assert!(style.background.is_some());
    }

    #[test]
    fn badge_uses_given_color() {
        let style = badge(palette::ANNOTATION_500)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ANNOTATION_500))
        );
    }
}
