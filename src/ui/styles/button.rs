// SPDX-License-Identifier: MPL-2.0
//! Button styles for the control panel, index sidebar and gallery header.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for selected/active button state.
///
/// Used for the current entry of the index sidebar and for the active
/// toggles of the control panel.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Style for control panel buttons that are not toggled on, and for the
/// secondary buttons of the main area.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let dark = theme.extended_palette().is_dark;
    let (background, text_color) = match (dark, status) {
        (false, button::Status::Hovered) => (palette::GRAY_200, palette::GRAY_900),
        (false, _) => (palette::GRAY_100, palette::GRAY_900),
        (true, button::Status::Hovered) => (Color::from_rgb(0.35, 0.35, 0.35), WHITE),
        (true, _) => (palette::GRAY_700, WHITE),
    };

    let (text_color, border_color, shadow) = match status {
        button::Status::Hovered => (text_color, palette::PRIMARY_500, shadow::SM),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (text_color, palette::GRAY_400, shadow::NONE)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Borderless, transparent button used for index entries.
pub fn list_entry(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(theme.extended_palette().background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn unselected_hover_highlights_border() {
        let normal = unselected(&Theme::Light, button::Status::Active);
        let hover = unselected(&Theme::Light, button::Status::Hovered);
        assert_ne!(normal.border.color, hover.border.color);
        assert_eq!(hover.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn list_entry_is_transparent_until_hovered() {
        let idle = list_entry(&Theme::Dark, button::Status::Active);
        let hover = list_entry(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hover.background.is_some());
    }
}
