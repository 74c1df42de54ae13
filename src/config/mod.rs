// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[catalog]` - Catalog location, simulated latency, subcategory lists
//! - `[gallery]` - Swipe threshold, grid breakpoints, prefetching, fade-in
//!
//! Numeric values are stored as written and clamped to their supported range
//! when read through the accessor methods, so a hand-edited file can never
//! request a nonsensical threshold or cache size.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `PRINT_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use print_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::artwork::Category;
use crate::error::{Error, Result};
use crate::gallery::{GridBreakpoints, PrefetchConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where artworks come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog root: a directory or an `http(s)://` base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Artificial delay applied to every catalog call (milliseconds).
    #[serde(default = "default_latency_ms", skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,

    /// Subcategory files read for murals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mural_subcategories: Option<Vec<String>>,

    /// Subcategory files read for multi-panel canvases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_subcategories: Option<Vec<String>>,

    /// Subcategory files read for single-panel canvases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_canvas_subcategories: Option<Vec<String>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            latency_ms: default_latency_ms(),
            mural_subcategories: None,
            canvas_subcategories: None,
            single_canvas_subcategories: None,
        }
    }
}

impl CatalogConfig {
    /// Clamped per-call latency.
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(
            self.latency_ms
                .unwrap_or(DEFAULT_CATALOG_LATENCY_MS)
                .min(MAX_CATALOG_LATENCY_MS),
        )
    }

    /// Subcategory tags configured for `category`, falling back to the built-in lists.
    #[must_use]
    pub fn subcategories(&self, category: Category) -> Vec<String> {
        let (configured, builtin) = match category {
            Category::Mural => (&self.mural_subcategories, DEFAULT_MURAL_SUBCATEGORIES),
            Category::MultiPanelCanvas => {
                (&self.canvas_subcategories, DEFAULT_CANVAS_SUBCATEGORIES)
            }
            Category::SinglePanelCanvas => (
                &self.single_canvas_subcategories,
                DEFAULT_CANVAS_SUBCATEGORIES,
            ),
        };
        let mut tags: Vec<String> = Vec::new();
        let candidates: Vec<&str> = match configured {
            Some(configured) => configured.iter().map(|tag| tag.trim()).collect(),
            None => builtin.to_vec(),
        };
        // Repeated tags would read the same file twice and duplicate ids.
        for tag in candidates {
            if !tag.is_empty() && !tags.iter().any(|seen| seen == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}

/// Gallery behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Horizontal swipe distance that navigates the lightbox (logical pixels).
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Artworks prefetched on each side of the lightbox image (0 disables).
    #[serde(
        default = "default_prefetch_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_radius: Option<usize>,

    /// Prefetch cache budget in megabytes.
    #[serde(
        default = "default_prefetch_cache_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_cache_mb: Option<usize>,

    /// Maximum number of prefetched images kept.
    #[serde(
        default = "default_prefetch_max_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_max_images: Option<usize>,

    /// Window width under which the grid uses two columns.
    #[serde(
        default = "default_compact_max_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_max_width: Option<f32>,

    /// Window width under which the grid uses three columns.
    #[serde(
        default = "default_medium_max_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub medium_max_width: Option<f32>,

    /// Width hint appended to remote thumbnail URLs.
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<u32>,

    /// Fade-in duration for loaded images (milliseconds).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Whether grid tiles show artwork titles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_titles: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
            prefetch_radius: default_prefetch_radius(),
            prefetch_cache_mb: default_prefetch_cache_mb(),
            prefetch_max_images: default_prefetch_max_images(),
            compact_max_width: default_compact_max_width(),
            medium_max_width: default_medium_max_width(),
            thumbnail_width: default_thumbnail_width(),
            fade_ms: default_fade_ms(),
            show_titles: Some(true),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_px
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
            .clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }

    /// Grid breakpoints; an inverted pair falls back to the defaults.
    #[must_use]
    pub fn breakpoints(&self) -> GridBreakpoints {
        let clamp = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite())
                .unwrap_or(default)
                .clamp(MIN_BREAKPOINT_WIDTH, MAX_BREAKPOINT_WIDTH)
        };
        let compact_max = clamp(self.compact_max_width, DEFAULT_COMPACT_MAX_WIDTH);
        let medium_max = clamp(self.medium_max_width, DEFAULT_MEDIUM_MAX_WIDTH);
        if compact_max < medium_max {
            GridBreakpoints {
                compact_max,
                medium_max,
            }
        } else {
            GridBreakpoints::default()
        }
    }

    #[must_use]
    pub fn prefetch(&self) -> PrefetchConfig {
        let max_bytes = self
            .prefetch_cache_mb
            .unwrap_or(DEFAULT_PREFETCH_CACHE_BYTES / (1024 * 1024))
            .saturating_mul(1024 * 1024);
        PrefetchConfig::new(
            max_bytes,
            self.prefetch_max_images.unwrap_or(DEFAULT_MAX_IMAGES),
            self.prefetch_radius.unwrap_or(DEFAULT_PREFETCH_RADIUS),
        )
    }

    #[must_use]
    pub fn thumbnail_width(&self) -> u32 {
        self.thumbnail_width.unwrap_or(DEFAULT_THUMBNAIL_WIDTH)
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms.unwrap_or(DEFAULT_FADE_MS).min(MAX_FADE_MS))
    }

    #[must_use]
    pub fn show_titles(&self) -> bool {
        self.show_titles.unwrap_or(true)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Catalog location and shape.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Gallery behaviour.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_latency_ms() -> Option<u64> {
    Some(DEFAULT_CATALOG_LATENCY_MS)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_prefetch_radius() -> Option<usize> {
    Some(DEFAULT_PREFETCH_RADIUS)
}

fn default_prefetch_cache_mb() -> Option<usize> {
    Some(DEFAULT_PREFETCH_CACHE_BYTES / (1024 * 1024))
}

fn default_prefetch_max_images() -> Option<usize> {
    Some(DEFAULT_MAX_IMAGES)
}

fn default_compact_max_width() -> Option<f32> {
    Some(DEFAULT_COMPACT_MAX_WIDTH)
}

fn default_medium_max_width() -> Option<f32> {
    Some(DEFAULT_MEDIUM_MAX_WIDTH)
}

fn default_thumbnail_width() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
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
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================
