// SPDX-License-Identifier: MPL-2.0
//! View composition for the application root.

use super::{gallery_context, App, Message, ViewMode};
use crate::manifest::Canvas;
use crate::ui::control_panel::{self, Orientation};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::thumbnail::{self, ThumbnailRequest};
use crate::ui::{sidebar_index, styles};
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let layout = control_panel::Layout::for_width(
            self.window_size.width,
            self.config.control_panel.variant,
        );
        let panel = control_panel::view(control_panel::ViewContext {
            i18n: &self.i18n,
            layout,
            index_open: self.config.sidebar.open,
            is_dark: self.theme.is_dark(),
        })
        .map(Message::ControlPanel);

        let mut main = column![].width(Length::Fill).height(Length::Fill);
        if let Some(status) = self.status_bar() {
            main = main.push(status);
        }
        main = main.push(self.body());

        match layout.orientation {
            Orientation::Horizontal => column![panel, main].into(),
            Orientation::Vertical => row![panel, main].into(),
        }
    }

    fn status_bar(&self) -> Option<Element<'_, Message>> {
        let key = self.status.as_deref()?;
        let bar = row![
            text(self.i18n.tr(key)).size(typography::BODY_SM),
            Space::new().width(Length::Fill),
            button(text("\u{2715}").size(typography::BODY_SM))
                .on_press(Message::DismissStatus)
                .padding(spacing::XXS)
                .style(styles::button::unselected),
        ]
        .align_y(alignment::Vertical::Center);

        Some(
            container(bar)
                .width(Length::Fill)
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::status)
                .into(),
        )
    }

    fn body(&self) -> Element<'_, Message> {
        if self.manifest.is_none() {
            let key = if self.loading {
                "gallery-loading"
            } else {
                "gallery-empty"
            };
            return centered(text(self.i18n.tr(key)).size(typography::BODY).into());
        }

        match self.view_mode {
            ViewMode::Gallery => self.gallery_body(),
            ViewMode::Canvas => match self.current_canvas() {
                Some(canvas) => self.canvas_body(canvas),
                None => self.gallery_body(),
            },
        }
    }

    fn gallery_body(&self) -> Element<'_, Message> {
        let ctx = gallery_context(&self.manifest, &self.current, &self.annotations, &self.search);
        let gallery = self.gallery.view(ctx, &self.i18n).map(Message::Gallery);

        if !self.config.sidebar.open {
            return gallery;
        }

        let sidebar = sidebar_index::view(sidebar_index::ViewContext {
            i18n: &self.i18n,
            canvases: self.canvases(),
            current: self.current.as_ref(),
            thumbnail_height: self.config.sidebar.thumbnail_height,
            thumbnail_width: self.config.sidebar.thumbnail_width,
        })
        .map(Message::Sidebar);

        row![sidebar, gallery].height(Length::Fill).into()
    }

    fn canvas_body<'a>(&'a self, canvas: &'a Canvas) -> Element<'a, Message> {
        let back = button(text(self.i18n.tr("gallery-back")).size(typography::BODY))
            .on_press(Message::BackToGallery)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected);

        let locale = self.i18n.current_locale().to_string();
        let label = canvas.label.best(&locale).map_or_else(
            || {
                self.i18n
                    .tr_with_count("gallery-page-label", "number", canvas.index() + 1)
            },
            str::to_string,
        );

        // Bounded by the window, the picture is still a thumbnail and never
        // upscaled past the canvas size.
        let area = self.gallery_area();
        let picture = thumbnail::view(ThumbnailRequest {
            resource: canvas,
            max_width: Some(area.width.min(canvas.width() as f32)),
            max_height: Some(area.height.min(canvas.height() as f32)),
            label: Some(label),
        });

        column![
            container(back).padding([spacing::XS, spacing::MD]),
            centered(picture),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
