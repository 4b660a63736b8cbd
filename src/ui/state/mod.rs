// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that belongs to widgets rather than to the application model.

pub mod viewport;

pub use viewport::ViewportState;
