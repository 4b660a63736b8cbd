// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from a view context and turns its messages into events the
//! application handles.
//!
//! # Components
//!
//! - [`gallery`] - Wrapped grid of canvas tiles with lazy annotation requests
//! - [`sidebar_index`] - Compact list of all canvases
//! - [`control_panel`] - Responsive bar/rail with the workspace actions
//! - [`thumbnail`] - Aspect-preserving canvas thumbnail renderer
//!
//! # Shared Infrastructure
//!
//! - [`visibility`] - Viewport intersection tracking
//! - [`state`] - Widget-level state (scroll viewport)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants
//! - [`theming`] - Light/Dark/System theme mode management

pub mod control_panel;
pub mod design_tokens;
pub mod gallery;
pub mod sidebar_index;
pub mod state;
pub mod styles;
pub mod theming;
pub mod thumbnail;
pub mod visibility;
