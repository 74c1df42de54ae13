// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Swipe threshold for lightbox navigation
//! - **Grid**: Responsive column breakpoints and thumbnail sizing
//! - **Prefetch**: Adjacent-image cache limits
//! - **Catalog**: Simulated latency and default subcategory lists

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default horizontal displacement that triggers a swipe (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Below this window width the grid shows two columns.
pub const DEFAULT_COMPACT_MAX_WIDTH: f32 = 640.0;

/// Below this window width the grid shows three columns; four above.
pub const DEFAULT_MEDIUM_MAX_WIDTH: f32 = 1024.0;

/// Smallest accepted breakpoint width.
pub const MIN_BREAKPOINT_WIDTH: f32 = 200.0;

/// Largest accepted breakpoint width.
pub const MAX_BREAKPOINT_WIDTH: f32 = 4096.0;

/// Width requested from image hosts for grid thumbnails.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 600;

/// Fade-in duration once an image has loaded (milliseconds).
pub const DEFAULT_FADE_MS: u64 = 300;

/// Maximum fade-in duration (milliseconds).
pub const MAX_FADE_MS: u64 = 2_000;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default prefetch cache size in bytes (32 MB).
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum prefetch cache size in bytes (8 MB).
pub const MIN_PREFETCH_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum prefetch cache size in bytes (128 MB).
pub const MAX_PREFETCH_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Minimum number of cached images.
pub const MIN_MAX_IMAGES: usize = 4;

/// Maximum number of cached images.
pub const MAX_MAX_IMAGES: usize = 64;

/// Default number of artworks prefetched in each direction.
pub const DEFAULT_PREFETCH_RADIUS: usize = 1;

/// Maximum number of artworks prefetched in each direction.
pub const MAX_PREFETCH_RADIUS: usize = 4;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default artificial latency per catalog call (milliseconds).
pub const DEFAULT_CATALOG_LATENCY_MS: u64 = 0;

/// Maximum artificial latency per catalog call (milliseconds).
pub const MAX_CATALOG_LATENCY_MS: u64 = 5_000;

/// Number of leading artworks per subcategory flagged as featured.
pub const FEATURED_PER_SUBCATEGORY: usize = 3;

/// Subcategories listed for murals.
pub const DEFAULT_MURAL_SUBCATEGORIES: &[&str] = &[
    "traditional-and-cultural-nepali-design",
    "national-and-cultural",
    "abstract-design",
    "religious",
    "3d-mural",
    "beach-and-underwater",
    "birds-and-animals",
    "ceiling",
    "hotel-and-restaurant",
    "luxurious",
    "music-and-bar",
    "nature",
];

/// Subcategories listed for multi-panel and single-panel canvases.
pub const DEFAULT_CANVAS_SUBCATEGORIES: &[&str] = &[
    "national-and-cultural",
    "religious",
    "birds-and-animals",
    "ganesh",
    "music-and-beauty",
    "nature",
    "arts-and-painting",
    "buddha",
    "food-and-beverage",
    "games-and-cartoon",
    "mountain",
    "sports",
];

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(DEFAULT_COMPACT_MAX_WIDTH < DEFAULT_MEDIUM_MAX_WIDTH);
    assert!(DEFAULT_COMPACT_MAX_WIDTH >= MIN_BREAKPOINT_WIDTH);
    assert!(DEFAULT_MEDIUM_MAX_WIDTH <= MAX_BREAKPOINT_WIDTH);

    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);

    assert!(MIN_PREFETCH_CACHE_BYTES > 0);
    assert!(DEFAULT_PREFETCH_CACHE_BYTES >= MIN_PREFETCH_CACHE_BYTES);
    assert!(DEFAULT_PREFETCH_CACHE_BYTES <= MAX_PREFETCH_CACHE_BYTES);
    assert!(MIN_MAX_IMAGES > 0);
    assert!(DEFAULT_MAX_IMAGES >= MIN_MAX_IMAGES);
    assert!(DEFAULT_MAX_IMAGES <= MAX_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_RADIUS <= MAX_PREFETCH_RADIUS);

    assert!(DEFAULT_CATALOG_LATENCY_MS <= MAX_CATALOG_LATENCY_MS);
    assert!(!DEFAULT_MURAL_SUBCATEGORIES.is_empty());
    assert!(!DEFAULT_CANVAS_SUBCATEGORIES.is_empty());
};
