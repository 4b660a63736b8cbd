// SPDX-License-Identifier: MPL-2.0
//! Gallery tile: one selectable canvas thumbnail.
//!
//! A tile never changes the selection or loads anything itself. It turns
//! pointer presses, key presses and visibility changes into [`Effect`]s that
//! the gallery forwards to whoever owns the selection and the annotations.
//!
//! The one piece of real state is the annotation request latch: a tile whose
//! canvas is known to have no annotations asks for them the first time it
//! becomes visible, and never again for as long as the tile exists.

use crate::config::GalleryConfig;
use crate::i18n::fluent::I18n;
use crate::manifest::{Canvas, CanvasId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::layout;
use crate::ui::styles;
use crate::ui::thumbnail::{self, ThumbnailRequest};
use iced::keyboard::key::{Key, Named};
use iced::widget::{container, mouse_area, row, stack, text, tooltip};
use iced::{alignment, Element, Length, Size};

/// Size bounds shared by every tile of a gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    /// Maximum thumbnail height, also used to derive the tile width.
    pub height: f32,
    /// Optional maximum thumbnail width.
    pub width: Option<f32>,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            height: crate::config::DEFAULT_GALLERY_HEIGHT,
            width: None,
        }
    }
}

impl From<&GalleryConfig> for TileConfig {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            height: config.clamped_height(),
            width: config.width,
        }
    }
}

/// Whether this tile already asked for its canvas annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    NotRequested,
    Requested,
}

/// Inputs owned by the gallery and read by the tile on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Props {
    /// The tile's canvas is the current one.
    pub selected: bool,
    /// Annotation count, `None` while unknown or when loading is disabled.
    pub annotations_count: Option<u32>,
    /// Number of search hits on the canvas.
    pub search_annotations_count: u32,
}

/// Messages for a single tile.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer press on the tile.
    Pressed,
    /// Key pressed while the tile has keyboard focus.
    KeyPressed(Key),
    /// The tile entered or left the viewport.
    IntersectionChanged { is_intersecting: bool },
}

/// Intents produced by a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Make this canvas the current one.
    SetCanvas(CanvasId),
    /// Bring the already current canvas into focus.
    FocusOnCanvas,
    /// Load the annotations of this tile's canvas.
    RequestCanvasAnnotations,
}

/// Badge drawn over the thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Search(u32),
    Annotations(u32),
}

/// Style modifiers of the tile frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub selected: bool,
    /// Set for search hits only; plain annotations do not tint the tile.
    pub has_annotations: bool,
}

/// Sizes derived from the gallery configuration and the canvas shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    /// Width of the tile's thumbnail box, `ceil(height * aspect_ratio)`.
    pub max_width: f32,
    /// Width bound passed to the thumbnail renderer.
    pub renderer_max_width: Option<f32>,
    /// Height bound passed to the thumbnail renderer.
    pub renderer_max_height: f32,
}

impl TileLayout {
    /// Outer size of the tile in the gallery flow.
    #[must_use]
    pub fn outer_size(&self) -> Size {
        layout::tile_outer_size(Size::new(self.max_width, self.renderer_max_height))
    }
}

/// Computes the tile box from the configured height and the canvas shape.
#[must_use]
pub fn compute_layout(config: &TileConfig, aspect_ratio: f32) -> TileLayout {
    TileLayout {
        max_width: (config.height * aspect_ratio).ceil(),
        renderer_max_width: config.width,
        renderer_max_height: config.height,
    }
}

/// Badges to show, search hits first.
#[must_use]
pub fn badges(props: &Props) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(2);
    if props.search_annotations_count > 0 {
        badges.push(Badge::Search(props.search_annotations_count));
    }
    if let Some(count) = props.annotations_count.filter(|count| *count > 0) {
        badges.push(Badge::Annotations(count));
    }
    badges
}

#[must_use]
pub fn modifiers(props: &Props) -> Modifiers {
    Modifiers {
        selected: props.selected,
        has_annotations: props.search_annotations_count > 0,
    }
}

/// Enter and Space activate a tile.
#[must_use]
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Named(Named::Enter | Named::Space) => true,
        Key::Character(c) => c.as_str() == " ",
        _ => false,
    }
}

/// Tile state.
#[derive(Debug, Clone)]
pub struct State {
    canvas_id: CanvasId,
    index: usize,
    aspect_ratio: f32,
    request: RequestState,
}

impl State {
    #[must_use]
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            canvas_id: canvas.id().clone(),
            index: canvas.index(),
            aspect_ratio: canvas.aspect_ratio(),
            request: RequestState::NotRequested,
        }
    }

    #[must_use]
    pub fn canvas_id(&self) -> &CanvasId {
        &self.canvas_id
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn request_state(&self) -> RequestState {
        self.request
    }

    #[must_use]
    pub fn layout(&self, config: &TileConfig) -> TileLayout {
        compute_layout(config, self.aspect_ratio)
    }

    /// Handle a tile message.
    pub fn handle(&mut self, message: Message, props: &Props) -> Effect {
        match message {
            Message::Pressed => self.activate(props),
            Message::KeyPressed(key) => {
                if is_activation_key(&key) {
                    self.activate(props)
                } else {
                    // Other keys select the canvas too, even when it is
                    // already current.
                    Effect::SetCanvas(self.canvas_id.clone())
                }
            }
            Message::IntersectionChanged { is_intersecting } => {
                self.on_intersection_change(is_intersecting, props)
            }
        }
    }

    fn activate(&self, props: &Props) -> Effect {
        if props.selected {
            Effect::FocusOnCanvas
        } else {
            Effect::SetCanvas(self.canvas_id.clone())
        }
    }

    fn on_intersection_change(&mut self, is_intersecting: bool, props: &Props) -> Effect {
        if !is_intersecting
            || props.annotations_count != Some(0)
            || self.request == RequestState::Requested
        {
            return Effect::None;
        }

        self.request = RequestState::Requested;
        log::debug!("Requesting annotations for canvas {}", self.canvas_id);
        Effect::RequestCanvasAnnotations
    }

    /// Render the tile.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let layout = self.layout(&ctx.config);
        let modifiers = modifiers(&ctx.props);

        let label = ctx
            .canvas
            .label
            .best(&ctx.i18n.current_locale().to_string())
            .map(str::to_string)
            .unwrap_or_else(|| {
                ctx.i18n
                    .tr_with_count("gallery-page-label", "number", self.index + 1)
            });

        let picture = container(thumbnail::view(ThumbnailRequest {
            resource: ctx.canvas,
            max_width: layout.renderer_max_width,
            max_height: Some(layout.renderer_max_height),
            label: Some(label),
        }))
        .width(Length::Fixed(layout.max_width))
        .height(Length::Fixed(
            layout.renderer_max_height + sizing::TILE_LABEL_HEIGHT,
        ))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom);

        let overlay = row(badges(&ctx.props)
            .into_iter()
            .map(|badge| badge_view(ctx.i18n, badge)))
        .spacing(spacing::XXS);

        let content = stack![
            picture,
            container(overlay)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::XXS),
        ];

        let framed = container(content)
            .padding(layout::TILE_PADDING)
            .style(styles::container::tile(
                modifiers.selected,
                modifiers.has_annotations,
            ));

        mouse_area(framed).on_press(Message::Pressed).into()
    }
}

/// Everything a tile reads while rendering.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub canvas: &'a Canvas,
    pub props: Props,
    pub config: TileConfig,
    pub i18n: &'a I18n,
}

fn badge_view<'a>(i18n: &I18n, badge: Badge) -> Element<'a, Message> {
    let (count, color, key) = match badge {
        Badge::Search(count) => (count, palette::SEARCH_500, "gallery-search-badge"),
        Badge::Annotations(count) => (count, palette::ANNOTATION_500, "gallery-annotations-badge"),
    };
    let count_text = count.to_string();
    let description = i18n.tr_with_count(key, "count", count as usize);

    let chip = container(text(count_text).size(typography::CAPTION))
        .padding([0.0, spacing::XS])
        .style(styles::container::badge(color));

    tooltip(
        chip,
        container(text(description).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::tooltip),
        tooltip::Position::Bottom,
    )
    .into()
}
