// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail tile bounds
//! - **Sidebar**: Index thumbnail bounds
//! - **Control panel**: Responsive breakpoint and thickness

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default maximum height of a gallery thumbnail, in pixels.
pub const DEFAULT_GALLERY_HEIGHT: f32 = 100.0;

/// Smallest accepted gallery thumbnail height.
pub const MIN_GALLERY_HEIGHT: f32 = 40.0;

/// Largest accepted gallery thumbnail height.
pub const MAX_GALLERY_HEIGHT: f32 = 600.0;

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Default bounds of an index thumbnail in the sidebar.
pub const DEFAULT_SIDEBAR_THUMBNAIL_HEIGHT: f32 = 50.0;
pub const DEFAULT_SIDEBAR_THUMBNAIL_WIDTH: f32 = 50.0;

/// Minimum width reserved for the thumbnail column of an index entry.
pub const SIDEBAR_THUMBNAIL_MIN_WIDTH: f32 = 50.0;

// ==========================================================================
// Control Panel Defaults
// ==========================================================================

/// Window width at which the control panel turns from a top bar into a
/// vertical rail (the `sm` breakpoint).
pub const CONTROL_PANEL_BREAKPOINT_SM: f32 = 600.0;

/// Height of the bar, or width of the rail.
pub const CONTROL_PANEL_THICKNESS: f32 = 64.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GALLERY_HEIGHT > 0.0);
    assert!(DEFAULT_GALLERY_HEIGHT >= MIN_GALLERY_HEIGHT);
    assert!(DEFAULT_GALLERY_HEIGHT <= MAX_GALLERY_HEIGHT);
    assert!(DEFAULT_SIDEBAR_THUMBNAIL_HEIGHT > 0.0);
    assert!(DEFAULT_SIDEBAR_THUMBNAIL_WIDTH > 0.0);
    assert!(CONTROL_PANEL_BREAKPOINT_SM > CONTROL_PANEL_THICKNESS);
};
