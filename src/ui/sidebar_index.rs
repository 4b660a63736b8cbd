// SPDX-License-Identifier: MPL-2.0
//! Index sidebar listing every canvas as a small thumbnail and its label.
//!
//! Entries are stateless: each one is an [`index_tile`] wrapped in a button
//! that makes its canvas the current one.

use crate::config::SIDEBAR_THUMBNAIL_MIN_WIDTH;
use crate::i18n::fluent::I18n;
use crate::manifest::{Canvas, CanvasId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnail::{self, ThumbnailRequest};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub canvases: &'a [Canvas],
    pub current: Option<&'a CanvasId>,
    /// Thumbnail bounds, `None` leaves that side unconstrained.
    pub thumbnail_height: Option<f32>,
    pub thumbnail_width: Option<f32>,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(CanvasId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetCanvas(CanvasId),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Select(id) => Event::SetCanvas(id),
    }
}

/// Thumbnail beside its label.
///
/// The thumbnail column is at least [`SIDEBAR_THUMBNAIL_MIN_WIDTH`] wide so
/// labels line up even for narrow canvases.
pub fn index_tile<'a, M: 'a>(
    canvas: &'a Canvas,
    label: String,
    height: Option<f32>,
    width: Option<f32>,
) -> Element<'a, M> {
    let request = ThumbnailRequest {
        resource: canvas,
        max_width: width,
        max_height: height,
        label: None,
    };
    let column_width = request.image_size().width.max(SIDEBAR_THUMBNAIL_MIN_WIDTH);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(thumbnail::view(request))
                .width(Length::Fixed(column_width))
                .align_x(Horizontal::Center),
        )
        .push(Text::new(label).size(typography::BODY_SM))
        .into()
}

/// Render the sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let locale = ctx.i18n.current_locale().to_string();

    let entries = ctx.canvases.iter().map(|canvas| {
        let label = canvas
            .label
            .best(&locale)
            .map(str::to_string)
            .unwrap_or_else(|| {
                ctx.i18n
                    .tr_with_count("gallery-page-label", "number", canvas.index() + 1)
            });
        let is_current = ctx.current == Some(canvas.id());

        Element::from(
            button(index_tile(
                canvas,
                label,
                ctx.thumbnail_height,
                ctx.thumbnail_width,
            ))
            .on_press(Message::Select(canvas.id().clone()))
            .padding(spacing::XXS)
            .width(Length::Fill)
            .style(if is_current {
                styles::button::selected
            } else {
                styles::button::list_entry
            }),
        )
    });

    let list = Column::with_children(entries)
        .spacing(spacing::XXS)
        .padding(spacing::XS);

    let content = Column::new()
        .push(
            container(Text::new(ctx.i18n.tr("sidebar-index-title")).size(typography::TITLE_SM))
                .padding([spacing::SM, spacing::MD]),
        )
        .push(scrollable(list).height(Length::Fill));

    container(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn select_sets_canvas() {
        let id = CanvasId::new("https://example.org/c1");
        assert_eq!(update(Message::Select(id.clone())), Event::SetCanvas(id));
    }

    #[test]
    fn sidebar_view_renders() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let canvases = vec![
            Canvas::new("c1", 0, 100, 200).expect("valid canvas"),
            Canvas::new("c2", 1, 300, 100).expect("valid canvas"),
        ];
        let _element: Element<'_, Message> = view(ViewContext {
            i18n: &i18n,
            canvases: &canvases,
            current: Some(canvases[1].id()),
            thumbnail_height: Some(50.0),
            thumbnail_width: None,
        });
    }
}
