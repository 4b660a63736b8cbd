// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail tile bounds and annotation loading
//! - `[sidebar]` - Index sidebar visibility and thumbnail bounds
//! - `[control_panel]` - Control panel variant
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `IIIF_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iiif_gallery::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("de".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Control panel presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PanelVariant {
    /// Glyph-only buttons.
    #[default]
    Default,
    /// Glyphs with labels; the panel sizes to its content.
    Wide,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "de").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery tile settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Maximum thumbnail height in pixels.
    #[serde(default = "default_gallery_height")]
    pub height: f32,

    /// Optional maximum thumbnail width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Whether per-canvas annotation counts are requested lazily.
    #[serde(default = "default_true")]
    pub annotations: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_GALLERY_HEIGHT,
            width: None,
            annotations: true,
        }
    }
}

impl GalleryConfig {
    /// Height clamped to the supported range.
    #[must_use]
    pub fn clamped_height(&self) -> f32 {
        if self.height.is_finite() {
            self.height.clamp(MIN_GALLERY_HEIGHT, MAX_GALLERY_HEIGHT)
        } else {
            DEFAULT_GALLERY_HEIGHT
        }
    }
}

/// Index sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    #[serde(default = "default_true")]
    pub open: bool,

    #[serde(default = "default_sidebar_thumbnail_height")]
    pub thumbnail_height: Option<f32>,

    #[serde(default = "default_sidebar_thumbnail_width")]
    pub thumbnail_width: Option<f32>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            open: true,
            thumbnail_height: default_sidebar_thumbnail_height(),
            thumbnail_width: default_sidebar_thumbnail_width(),
        }
    }
}

/// Control panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ControlPanelConfig {
    #[serde(default)]
    pub variant: PanelVariant,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,

    #[serde(default)]
    pub control_panel: ControlPanelConfig,
}

fn default_true() -> bool {
    true
}

fn default_gallery_height() -> f32 {
    DEFAULT_GALLERY_HEIGHT
}

fn default_sidebar_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_SIDEBAR_THUMBNAIL_HEIGHT)
}

fn default_sidebar_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_SIDEBAR_THUMBNAIL_WIDTH)
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
