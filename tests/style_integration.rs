// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Color, Theme};
    use iiif_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iiif_gallery::ui::styles::{button, container};
    use iiif_gallery::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::selected(&theme, status);
                let _ = button::unselected(&theme, status);
                let _ = button::list_entry(&theme, status);
            }
            let _ = container::panel(&theme);
            let _ = container::placeholder(&theme);
            let _ = container::tooltip(&theme);
            let _ = container::status(&theme);
            let _ = container::tile(true, true)(&theme);
            let _ = container::badge(palette::SEARCH_500)(&theme);
        }
    }

    #[test]
    fn badges_are_distinguishable() {
        assert_ne!(palette::SEARCH_500, palette::ANNOTATION_500);

        let search = container::badge(palette::SEARCH_500)(&Theme::Light);
        let annotations = container::badge(palette::ANNOTATION_500)(&Theme::Light);
        assert_ne!(search.background, annotations.background);
    }

    #[test]
    fn only_selected_tiles_are_outlined() {
        let selected = container::tile(true, false)(&Theme::Dark);
        let plain = container::tile(false, false)(&Theme::Dark);
        assert_ne!(selected.border.color, Color::TRANSPARENT);
        assert_eq!(plain.border.color, Color::TRANSPARENT);
        // Same width, so selecting a tile never reflows the grid
        assert_eq!(selected.border.width, plain.border.width);
        assert_eq!(selected.border.width, sizing::TILE_SELECTED_OUTLINE);
    }

    #[test]
    fn design_tokens_are_ordered() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::MD);
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_HOVER);
        assert!(sizing::SIDEBAR_WIDTH > sizing::SEARCH_WIDTH / 2.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        assert!(!light.is_dark());
        assert!(dark.is_dark());
        assert_eq!(light.iced_theme(), Theme::Light);
        assert_eq!(dark.iced_theme(), Theme::Dark);
        assert!(matches!(
            container::panel(&dark.iced_theme()).background,
            Some(Background::Color(_))
        ));
    }
}
