// SPDX-License-Identifier: MPL-2.0
//! Artwork record types.

use std::fmt;

// =============================================================================
// ArtworkId
// =============================================================================

/// Stable identifier of an artwork within its category.
///
/// Identifiers are unique inside one rendered gallery; the catalog layer
/// builds them as `<prefix>-<subcategory>-<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ArtworkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Closed set of gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Mural,
    MultiPanelCanvas,
    SinglePanelCanvas,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [
        Category::Mural,
        Category::MultiPanelCanvas,
        Category::SinglePanelCanvas,
    ];

    /// Kebab-case key used on the command line and in config files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Mural => "mural",
            Category::MultiPanelCanvas => "multi-panel-canvas",
            Category::SinglePanelCanvas => "single-panel-canvas",
        }
    }

    /// Parses a category key. Accepts the legacy `canvas`/`single-canvas` spellings.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "mural" | "murals" => Some(Category::Mural),
            "multi-panel-canvas" | "canvas" => Some(Category::MultiPanelCanvas),
            "single-panel-canvas" | "single-canvas" => Some(Category::SinglePanelCanvas),
            _ => None,
        }
    }

    /// Directory holding this category's subcategory CSV files.
    #[must_use]
    pub fn data_dir(self) -> &'static str {
        match self {
            Category::Mural => "murals",
            Category::MultiPanelCanvas => "canvas",
            Category::SinglePanelCanvas => "single-canvas",
        }
    }

    /// Prefix for synthesized artwork identifiers.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Category::Mural => "m",
            Category::MultiPanelCanvas => "c",
            Category::SinglePanelCanvas => "s",
        }
    }

    /// i18n key for the category's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Mural => "category-mural",
            Category::MultiPanelCanvas => "category-multi-panel-canvas",
            Category::SinglePanelCanvas => "category-single-panel-canvas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// ArtworkRecord
// =============================================================================

/// One displayable artwork with metadata and category tags.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    /// Full-resolution source location (URL or path).
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    /// Alternate source tried once when `image_url` fails to load.
    pub fallback_url: Option<String>,
    pub category: Category,
    pub subcategory: String,
    pub featured: bool,
}

impl ArtworkRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(
        id: impl Into<ArtworkId>,
        image_url: impl Into<String>,
        category: Category,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            artist: None,
            description: None,
            image_url: image_url.into(),
            thumbnail_url: None,
            fallback_url: None,
            category,
            subcategory: subcategory.into(),
            featured: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Source used for grid tiles: the thumbnail when present, else the full image.
    #[must_use]
    pub fn tile_source(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }

    /// Title for display, treating blank strings as absent.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Artist for display, treating blank strings as absent.
    #[must_use]
    pub fn display_artist(&self) -> Option<&str> {
        non_blank(self.artist.as_deref())
    }

    /// Description for display, treating blank strings as absent.
    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn legacy_category_spellings_are_accepted() {
        assert_eq!(Category::from_key("canvas"), Some(Category::MultiPanelCanvas));
        assert_eq!(
            Category::from_key("single-canvas"),
            Some(Category::SinglePanelCanvas)
        );
        assert_eq!(Category::from_key("sculpture"), None);
    }

    #[test]
    fn tile_source_prefers_thumbnail() {
        let record = ArtworkRecord::new("m-nature-0", "/full.jpg", Category::Mural, "nature");
        assert_eq!(record.tile_source(), "/full.jpg");

        let record = record.with_thumbnail("/thumb.jpg");
        assert_eq!(record.tile_source(), "/thumb.jpg");
    }

    #[test]
    fn blank_display_text_is_treated_as_absent() {
        let record = ArtworkRecord::new("m-nature-0", "/full.jpg", Category::Mural, "nature")
            .with_title("   ")
            .with_artist("Sita");
        assert_eq!(record.display_title(), None);
        assert_eq!(record.display_artist(), Some("Sita"));
        assert_eq!(record.display_description(), None);
    }
}
