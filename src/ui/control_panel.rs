// SPDX-License-Identifier: MPL-2.0
//! Control panel with the workspace-level actions.
//!
//! Below the `sm` breakpoint the panel is a horizontal bar across the top of
//! the window with its buttons spread out. From `sm` up it becomes a
//! vertical rail on the left, with its buttons stacked from the top and the
//! application branding at the bottom. The wide variant sizes the panel to
//! its content and shows labels next to the buttons.

use crate::config::{PanelVariant, CONTROL_PANEL_BREAKPOINT_SM, CONTROL_PANEL_THICKNESS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, tooltip, Column, Row, Text};
use iced::{Element, Length};

/// Direction the panel runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top bar, used on narrow windows.
    Horizontal,
    /// Left rail, used from the `sm` breakpoint up.
    Vertical,
}

/// Responsive layout of the panel for a given window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    pub show_branding: bool,
    /// Panel sizes to its content instead of the fixed thickness.
    pub wide: bool,
}

impl Layout {
    #[must_use]
    pub fn for_width(window_width: f32, variant: PanelVariant) -> Self {
        let is_sm = window_width >= CONTROL_PANEL_BREAKPOINT_SM;
        Self {
            orientation: if is_sm {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            },
            show_branding: is_sm,
            wide: variant == PanelVariant::Wide,
        }
    }

    /// Fixed thickness of the panel, `None` when it sizes to its content.
    #[must_use]
    pub fn thickness(&self) -> Option<f32> {
        (!self.wide).then_some(CONTROL_PANEL_THICKNESS)
    }
}

/// Contextual data needed to render the control panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub index_open: bool,
    pub is_dark: bool,
}

/// Messages emitted by the control panel.
#[derive(Debug, Clone)]
pub enum Message {
    OpenManifest,
    ToggleIndex,
    ToggleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenManifest,
    ToggleIndex,
    ToggleTheme,
    CycleLanguage,
}

/// Process a control panel message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenManifest => Event::OpenManifest,
        Message::ToggleIndex => Event::ToggleIndex,
        Message::ToggleTheme => Event::ToggleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

/// Render the control panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let buttons = [
        control_button(&ctx, "\u{1F4C2}", "control-panel-open", Message::OpenManifest, false),
        control_button(
            &ctx,
            "\u{2630}",
            "control-panel-toggle-index",
            Message::ToggleIndex,
            ctx.index_open,
        ),
        control_button(
            &ctx,
            if ctx.is_dark { "\u{263C}" } else { "\u{263E}" },
            "control-panel-toggle-theme",
            Message::ToggleTheme,
            false,
        ),
        control_button(
            &ctx,
            "\u{1F310}",
            "control-panel-language",
            Message::CycleLanguage,
            false,
        ),
    ];

    let panel: Element<'a, Message> = match ctx.layout.orientation {
        Orientation::Horizontal => Row::with_children(buttons)
            .spacing(spacing::XS)
            .padding(spacing::XS)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fixed(CONTROL_PANEL_THICKNESS))
            .into(),
        Orientation::Vertical => {
            let mut rail = Column::new()
                .push(
                    Column::with_children(buttons)
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center),
                )
                .padding(spacing::XS)
                .height(Length::Fill)
                .align_x(Horizontal::Center);
            if ctx.layout.show_branding {
                rail = rail
                    .push(container(Text::new("")).height(Length::Fill))
                    .push(
                        Text::new(ctx.i18n.tr("control-panel-branding"))
                            .size(typography::CAPTION),
                    );
            }
            match ctx.layout.thickness() {
                Some(width) => rail.width(Length::Fixed(width)).into(),
                None => rail.width(Length::Shrink).into(),
            }
        }
    };

    container(panel).style(styles::container::panel).into()
}

fn control_button<'a>(
    ctx: &ViewContext<'a>,
    glyph: &'static str,
    label_key: &str,
    message: Message,
    active: bool,
) -> Element<'a, Message> {
    let label = ctx.i18n.tr(label_key);
    let glyph = Text::new(glyph).size(typography::TITLE_MD);

    let content: Element<'a, Message> = if ctx.layout.wide {
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(Text::new(label.clone()).size(typography::BODY))
            .into()
    } else {
        glyph.into()
    };

    let control = button(content)
        .on_press(message)
        .padding(spacing::XS)
        .style(if active {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let position = match ctx.layout.orientation {
        Orientation::Horizontal => tooltip::Position::Bottom,
        Orientation::Vertical => tooltip::Position::Right,
    };

    tooltip(
        control,
        container(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::tooltip),
        position,
    )
    .into()
}
