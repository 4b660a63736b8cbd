// SPDX-License-Identifier: MPL-2.0
//! Gallery view: every canvas of the manifest as a wrapped grid of tiles.
//!
//! The gallery owns the tile states, lays them out, and watches the
//! scrollable viewport. Visibility changes are fed to the tiles, and the
//! tiles' effects come back to the application as [`Event`]s.
//!
//! Tiles live as long as the manifest: scrolling never recreates them, so a
//! tile's annotation request latch holds across scrolls. Loading another
//! manifest builds fresh tiles.

pub mod layout;
pub mod tile;

use crate::annotations::{AnnotationStore, SearchHits};
use crate::i18n::fluent::I18n;
use crate::manifest::{Canvas, CanvasId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ViewportState;
use crate::ui::visibility::Watcher;
use iced::keyboard::Key;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, container, row, scrollable, text, text_input, Column};
use iced::{alignment, Element, Length, Rectangle, Size};

pub use layout::FlowLayout;
pub use tile::TileConfig;

/// Read-only inputs the gallery needs from the application.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub canvases: &'a [Canvas],
    pub current: Option<&'a CanvasId>,
    pub annotations: &'a AnnotationStore,
    pub search: &'a SearchHits,
}

impl Context<'_> {
    /// Props of the tile at `index`.
    #[must_use]
    pub fn props(&self, index: usize) -> tile::Props {
        let Some(canvas) = self.canvases.get(index) else {
            return tile::Props::default();
        };
        tile::Props {
            selected: self.current == Some(canvas.id()),
            annotations_count: self.annotations.count(canvas.id()),
            search_annotations_count: self.search.count(index),
        }
    }
}

/// Messages for the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Tile(usize, tile::Message),
    /// The scrollable moved or was resized.
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Window size, used until the scrollable reports its own bounds.
    Resized(Size),
    /// Key pressed that no widget captured.
    KeyPressed(Key),
    SearchChanged(String),
}

/// Events emitted to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetCanvas(CanvasId),
    FocusOnCanvas,
    RequestCanvasAnnotations(CanvasId),
    SearchChanged(String),
}

/// Gallery state.
#[derive(Debug, Clone, Default)]
pub struct State {
    tiles: Vec<tile::State>,
    flow: FlowLayout,
    watcher: Watcher,
    viewport: ViewportState,
    /// Tile that receives key presses.
    focused: Option<usize>,
    config: TileConfig,
    search_input: String,
}

impl State {
    #[must_use]
    pub fn new(config: TileConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Builds one fresh tile per canvas, then reports what is visible.
    pub fn load(&mut self, ctx: &Context) -> Vec<Event> {
        self.tiles = ctx.canvases.iter().map(tile::State::new).collect();
        self.watcher.reset();
        self.viewport.reset_offset();
        self.focused = None;
        self.search_input.clear();
        self.relayout();
        self.refresh_visibility(ctx)
    }

    /// Drops all tiles.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.watcher.reset();
        self.flow = FlowLayout::default();
        self.focused = None;
        self.search_input.clear();
    }

    pub fn set_config(&mut self, config: TileConfig, ctx: &Context) -> Vec<Event> {
        if self.config == config {
            return Vec::new();
        }
        self.config = config;
        self.relayout();
        self.refresh_visibility(ctx)
    }

    #[must_use]
    pub fn tiles(&self) -> &[tile::State] {
        &self.tiles
    }

    #[must_use]
    pub fn flow(&self) -> &FlowLayout {
        &self.flow
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Handle a gallery message.
    pub fn update(&mut self, message: Message, ctx: &Context) -> Vec<Event> {
        match message {
            Message::Tile(index, message) => {
                if matches!(message, tile::Message::Pressed) {
                    self.focused = Some(index);
                }
                self.dispatch(index, message, ctx).into_iter().collect()
            }
            Message::Scrolled { bounds, offset } => {
                if self.viewport.update(bounds, offset) {
                    self.relayout();
                }
                self.refresh_visibility(ctx)
            }
            Message::Resized(size) => {
                if self.viewport.seed(size) {
                    self.relayout();
                }
                self.refresh_visibility(ctx)
            }
            Message::KeyPressed(key) => match self.focused {
                Some(index) => self
                    .dispatch(index, tile::Message::KeyPressed(key), ctx)
                    .into_iter()
                    .collect(),
                None => Vec::new(),
            },
            Message::SearchChanged(query) => {
                self.focused = None;
                self.search_input.clone_from(&query);
                vec![Event::SearchChanged(query)]
            }
        }
    }

    fn dispatch(&mut self, index: usize, message: tile::Message, ctx: &Context) -> Option<Event> {
        let props = ctx.props(index);
        let tile = self.tiles.get_mut(index)?;
        match tile.handle(message, &props) {
            tile::Effect::None => None,
            tile::Effect::SetCanvas(id) => Some(Event::SetCanvas(id)),
            tile::Effect::FocusOnCanvas => Some(Event::FocusOnCanvas),
            tile::Effect::RequestCanvasAnnotations => {
                Some(Event::RequestCanvasAnnotations(tile.canvas_id().clone()))
            }
        }
    }

    fn relayout(&mut self) {
        let Some(width) = self.viewport.width() else {
            return;
        };
        let sizes: Vec<Size> = self
            .tiles
            .iter()
            .map(|tile| tile.layout(&self.config).outer_size())
            .collect();
        self.flow = layout::flow(&sizes, width);
    }

    fn refresh_visibility(&mut self, ctx: &Context) -> Vec<Event> {
        let Some(visible) = self.viewport.visible_rect() else {
            return Vec::new();
        };
        if self.flow.regions.len() != self.tiles.len() {
            return Vec::new();
        }

        self.watcher
            .observe(&self.flow.regions, &visible)
            .into_iter()
            .filter_map(|change| {
                self.dispatch(
                    change.index,
                    tile::Message::IntersectionChanged {
                        is_intersecting: change.is_intersecting,
                    },
                    ctx,
                )
            })
            .collect()
    }

    /// Render the gallery.
    pub fn view<'a>(&'a self, ctx: Context<'a>, i18n: &'a I18n) -> Element<'a, Message> {
        let search = text_input(&i18n.tr("gallery-search-placeholder"), &self.search_input)
            .on_input(Message::SearchChanged)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::SEARCH_WIDTH));

        let mut header = row![search]
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        let total = ctx.search.total();
        if total > 0 {
            header = header.push(
                text(i18n.tr_with_count("gallery-search-badge", "count", total as usize))
                    .size(typography::BODY_SM),
            );
        }

        let tile_view = move |index: usize| -> Option<Element<'a, Message>> {
            let state = self.tiles.get(index)?;
            let canvas = ctx.canvases.get(index)?;
            Some(
                state
                    .view(tile::ViewContext {
                        canvas,
                        props: ctx.props(index),
                        config: self.config,
                        i18n,
                    })
                    .map(move |message| Message::Tile(index, message)),
            )
        };

        let grid: Element<'a, Message> = if self.flow.regions.len() == self.tiles.len() {
            Column::with_children(self.flow.rows.iter().map(|range| {
                Element::from(
                    row(range.clone().filter_map(&tile_view)).spacing(layout::TILE_SPACING),
                )
            }))
            .spacing(layout::TILE_SPACING)
            .into()
        } else {
            // Width not known yet
            row((0..self.tiles.len()).filter_map(&tile_view))
                .spacing(layout::TILE_SPACING)
                .wrap()
                .into()
        };

        let content = scrollable(
            container(grid)
                .width(Length::Fill)
                .padding(layout::CONTENT_PADDING),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

        column![
            container(header).padding([spacing::XS, spacing::MD]),
            content
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
