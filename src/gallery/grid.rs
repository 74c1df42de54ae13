// SPDX-License-Identifier: MPL-2.0
//! Grid renderer model.
//!
//! [`GalleryGrid`] owns the category's full artwork sequence, the active
//! [`SubcategoryFilter`] and the filtered sequence derived from both. The
//! filtered sequence is what gets rendered and what the lightbox navigates;
//! the input sequence itself is never reordered or mutated.

use crate::config::{DEFAULT_COMPACT_MAX_WIDTH, DEFAULT_MEDIUM_MAX_WIDTH};
use crate::domain::artwork::{ArtworkId, ArtworkRecord, SubcategoryFilter};

/// Window widths at which the grid gains a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBreakpoints {
    /// Below this width the grid shows two columns.
    pub compact_max: f32,
    /// Below this width (and at or above `compact_max`) the grid shows three.
    pub medium_max: f32,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            compact_max: DEFAULT_COMPACT_MAX_WIDTH,
            medium_max: DEFAULT_MEDIUM_MAX_WIDTH,
        }
    }
}

impl GridBreakpoints {
    /// Number of grid columns for a viewport `width` in logical pixels.
    #[must_use]
    pub fn columns_for_width(&self, width: f32) -> usize {
        if width < self.compact_max {
            2
        } else if width < self.medium_max {
            3
        } else {
            4
        }
    }
}

/// One rendered grid cell.
#[derive(Debug, Clone, Copy)]
pub struct GridTile<'a> {
    /// Position in the rendered sequence.
    pub index: usize,
    pub artwork: &'a ArtworkRecord,
}

impl<'a> GridTile<'a> {
    /// Caption shown under the thumbnail; `None` when the record has no title.
    #[must_use]
    pub fn caption(&self) -> Option<&'a str> {
        self.artwork.display_title()
    }

    /// Source to load for the thumbnail.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.artwork.tile_source()
    }
}

/// Artwork sequence, filter and derived tiles for one gallery page.
#[derive(Debug, Clone, Default)]
pub struct GalleryGrid {
    all: Vec<ArtworkRecord>,
    filter: SubcategoryFilter,
    visible: Vec<ArtworkRecord>,
    subcategories: Vec<String>,
}

impl GalleryGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the artwork sequence and re-applies the current filter.
    ///
    /// Subcategory tags are collected in order of first appearance unless
    /// [`set_subcategories`](Self::set_subcategories) supplies them.
    pub fn set_artworks(&mut self, artworks: Vec<ArtworkRecord>) {
        self.all = artworks;
        if self.subcategories.is_empty() {
            let mut tags: Vec<String> = Vec::new();
            for artwork in &self.all {
                if !tags.contains(&artwork.subcategory) {
                    tags.push(artwork.subcategory.clone());
                }
            }
            self.subcategories = tags;
        }
        self.refresh();
    }

    /// Sets the subcategory tags offered by the filter bar.
    pub fn set_subcategories(&mut self, tags: Vec<String>) {
        self.subcategories = tags;
    }

    /// Changes the active filter. Returns `true` if it changed.
    pub fn set_filter(&mut self, filter: SubcategoryFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.visible = self.filter.apply(&self.all);
    }

    #[must_use]
    pub fn filter(&self) -> &SubcategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn subcategories(&self) -> &[String] {
        &self.subcategories
    }

    /// The rendered (filtered) sequence.
    #[must_use]
    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.visible
    }

    /// The unfiltered sequence as received from the catalog.
    #[must_use]
    pub fn all_artworks(&self) -> &[ArtworkRecord] {
        &self.all
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// One tile per visible artwork, in sequence order.
    pub fn tiles(&self) -> impl Iterator<Item = GridTile<'_>> {
        self.visible
            .iter()
            .enumerate()
            .map(|(index, artwork)| GridTile { index, artwork })
    }

    /// Tiles split into rows of `columns` cells. The last row may be short.
    #[must_use]
    pub fn rows(&self, columns: usize) -> Vec<Vec<GridTile<'_>>> {
        let tiles: Vec<_> = self.tiles().collect();
        tiles
            .chunks(columns.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Id to open in the lightbox when the tile at `index` is clicked.
    #[must_use]
    pub fn open_intent(&self, index: usize) -> Option<ArtworkId> {
        self.visible.get(index).map(|artwork| artwork.id.clone())
    }
}
