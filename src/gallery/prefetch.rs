// SPDX-License-Identifier: MPL-2.0
//! Adjacent-image prefetching for the lightbox.
//!
//! When the lightbox opens or moves, the full-resolution images of the
//! neighbouring artworks are fetched in the background so the next
//! navigation can show them immediately. Prefetching only affects
//! responsiveness: a miss simply falls back to a regular load.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total size limited by a configurable byte budget
//! - **Source-keyed**: entries are indexed by their image URL or path
//! - **Payload-agnostic**: the cache stores whatever the view draws from

use crate::application::query::ArtworkSequence;
use crate::config::{
    DEFAULT_MAX_IMAGES, DEFAULT_PREFETCH_CACHE_BYTES, DEFAULT_PREFETCH_RADIUS, MAX_MAX_IMAGES,
    MAX_PREFETCH_CACHE_BYTES, MAX_PREFETCH_RADIUS, MIN_MAX_IMAGES, MIN_PREFETCH_CACHE_BYTES,
};
use crate::domain::artwork::{ArtworkId, ArtworkRecord};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,

    /// Number of artworks to prefetch in each direction.
    pub radius: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
            radius: DEFAULT_PREFETCH_RADIUS,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates a configuration with the limits clamped to supported ranges.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize, radius: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_PREFETCH_CACHE_BYTES, MAX_PREFETCH_CACHE_BYTES),
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
            radius: radius.min(MAX_PREFETCH_RADIUS),
            enabled: radius > 0,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Statistics about prefetch cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrefetchStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl PrefetchStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    payload: T,
    size_bytes: usize,
}

/// LRU cache of prefetched images keyed by source.
pub struct ImagePrefetchCache<T> {
    cache: LruCache<String, CacheEntry<T>>,
    config: PrefetchConfig,
    current_bytes: usize,
    stats: PrefetchStats,
}

impl<T: Clone> ImagePrefetchCache<T> {
    /// Creates a cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_IMAGES` is zero, which would indicate a build configuration error.
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("DEFAULT_MAX_IMAGES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: PrefetchStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PrefetchConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts an image of `size_bytes` encoded bytes.
    ///
    /// Returns `false` if caching is disabled or the image is larger than
    /// half the byte budget.
    pub fn insert(&mut self, source: impl Into<String>, payload: T, size_bytes: usize) -> bool {
        if !self.config.enabled || size_bytes > self.config.max_bytes / 2 {
            return false;
        }
        let source = source.into();

        if let Some(existing) = self.cache.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // LruCache evicts silently when the entry count is at capacity.
        if let Some((_, evicted)) = self.cache.push(source, CacheEntry { payload, size_bytes }) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += size_bytes;
        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;
        true
    }

    /// Returns a cached image and marks it as recently used.
    pub fn get(&mut self, source: &str) -> Option<T> {
        if !self.config.enabled {
            return None;
        }
        if let Some(entry) = self.cache.get(source) {
            self.stats.hits += 1;
            Some(entry.payload.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks for a cached image without updating LRU order.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.config.enabled && self.cache.contains(source)
    }

    /// Filters `sources` down to those not already cached.
    #[must_use]
    pub fn sources_to_prefetch<'s>(&self, sources: &[&'s str]) -> Vec<&'s str> {
        if !self.config.enabled {
            return Vec::new();
        }
        sources
            .iter()
            .copied()
            .filter(|source| !self.cache.contains(*source))
            .collect()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
        self.stats.image_count = 0;
        self.stats.total_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }
}

impl<T> std::fmt::Debug for ImagePrefetchCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePrefetchCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

/// One image the planner wants fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchRequest {
    pub id: ArtworkId,
    pub source: String,
}

/// Chooses which neighbouring images to fetch around the shown artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchPlanner {
    radius: usize,
}

impl Default for PrefetchPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_PREFETCH_RADIUS)
    }
}

impl PrefetchPlanner {
    #[must_use]
    pub fn new(radius: usize) -> Self {
        Self {
            radius: radius.min(MAX_PREFETCH_RADIUS),
        }
    }

    #[must_use]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Neighbours of `current`, nearest first, whose full image is not yet
    /// available according to `is_available`.
    pub fn plan(
        &self,
        artworks: &[ArtworkRecord],
        current: &ArtworkId,
        is_available: impl Fn(&ArtworkRecord) -> bool,
    ) -> Vec<PrefetchRequest> {
        ArtworkSequence::new(artworks)
            .neighbours(current, self.radius)
            .into_iter()
            .filter(|artwork| !is_available(artwork))
            .map(|artwork| PrefetchRequest {
                id: artwork.id.clone(),
                source: artwork.image_url.clone(),
            })
            .collect()
    }
}
