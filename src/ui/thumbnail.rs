// SPDX-License-Identifier: MPL-2.0
//! Canvas thumbnail renderer.
//!
//! Scales a canvas into the given maximum bounds while keeping its aspect
//! ratio. Local thumbnails are drawn with iced's image widget; remote ones
//! are not fetched and get a neutral placeholder of the same size.

use crate::manifest::{Canvas, ThumbnailSource};
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{column, container, image, text, Text};
use iced::{alignment, ContentFit, Element, Length, Size};

/// Everything the renderer needs for one thumbnail.
#[derive(Debug, Clone)]
pub struct ThumbnailRequest<'a> {
    pub resource: &'a Canvas,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    /// Caption drawn under the image.
    pub label: Option<String>,
}

impl ThumbnailRequest<'_> {
    /// Size the image will be drawn at.
    #[must_use]
    pub fn image_size(&self) -> Size {
        fit_size(
            self.resource.width() as f32,
            self.resource.height() as f32,
            self.max_width,
            self.max_height,
        )
    }
}

/// Scales `width` x `height` to fit every given bound.
///
/// With no bounds the natural size is kept. Unset bounds do not constrain.
#[must_use]
pub fn fit_size(width: f32, height: f32, max_width: Option<f32>, max_height: Option<f32>) -> Size {
    if width <= 0.0 || height <= 0.0 {
        return Size::ZERO;
    }

    let scale = [
        max_width.map(|bound| bound / width),
        max_height.map(|bound| bound / height),
    ]
    .into_iter()
    .flatten()
    .fold(None, |acc: Option<f32>, s| {
        Some(acc.map_or(s, |current| current.min(s)))
    })
    .unwrap_or(1.0);

    Size::new(width * scale, height * scale)
}

/// Renders the thumbnail and, if requested, its caption.
pub fn view<'a, Message: 'a>(request: ThumbnailRequest<'a>) -> Element<'a, Message> {
    let size = request.image_size();

    let picture: Element<'a, Message> = match &request.resource.thumbnail {
        Some(ThumbnailSource::Local(path)) => image(Handle::from_path(path))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ThumbnailSource::Remote(_)) | None => container(Text::new(""))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .style(styles::container::placeholder)
            .into(),
    };

    match request.label {
        Some(label) => column![
            picture,
            text(label)
                .size(typography::CAPTION)
                .height(Length::Fixed(sizing::TILE_LABEL_HEIGHT))
                .width(Length::Fixed(size.width))
                .align_x(alignment::Horizontal::Center)
                .wrapping(text::Wrapping::None),
        ]
        .align_x(alignment::Horizontal::Center)
        .into(),
        None => picture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_bound_keeps_aspect_ratio() {
        let size = fit_size(3000.0, 2000.0, None, Some(100.0));
        assert_eq!(size, Size::new(150.0, 100.0));
    }

    #[test]
    fn tighter_bound_wins() {
        let size = fit_size(3000.0, 2000.0, Some(60.0), Some(100.0));
        assert_eq!(size.width, 60.0);
        assert_eq!(size.height, 40.0);
    }

    #[test]
    fn no_bounds_keep_natural_size() {
        assert_eq!(fit_size(40.0, 30.0, None, None), Size::new(40.0, 30.0));
    }

    #[test]
    fn small_canvases_scale_up_to_bounds() {
        let size = fit_size(10.0, 20.0, Some(50.0), Some(50.0));
        assert_eq!(size, Size::new(25.0, 50.0));
    }

    #[test]
    fn degenerate_dimensions_collapse() {
        assert_eq!(fit_size(0.0, 20.0, Some(50.0), None), Size::ZERO);
    }

    #[test]
    fn request_uses_canvas_dimensions() {
        let canvas = Canvas::new("c1", 0, 1500, 1000).expect("valid canvas");
        let request = ThumbnailRequest {
            resource: &canvas,
            max_width: None,
            max_height: Some(100.0),
            label: None,
        };
        assert_eq!(request.image_size(), Size::new(150.0, 100.0));
    }
}
