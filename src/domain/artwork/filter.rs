// SPDX-License-Identifier: MPL-2.0
//! Subcategory filtering for gallery sequences.

use super::types::ArtworkRecord;

/// Which subcategory the gallery currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubcategoryFilter {
    /// Show every artwork of the category.
    #[default]
    All,
    /// Show only artworks tagged with the given subcategory.
    Only(String),
}

impl SubcategoryFilter {
    /// Builds a filter from a tag, treating `"all"` and blank input as [`SubcategoryFilter::All`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(tag.to_string())
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Returns `true` if the artwork passes the filter.
    #[must_use]
    pub fn matches(&self, artwork: &ArtworkRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => artwork.subcategory == *tag,
        }
    }

    /// Returns `true` if this filter selects exactly the given tag.
    #[must_use]
    pub fn selects(&self, tag: &str) -> bool {
        matches!(self, Self::Only(t) if t == tag)
    }

    /// Applies the filter, preserving the original order.
    #[must_use]
    pub fn apply(&self, artworks: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        artworks
            .iter()
            .filter(|artwork| self.matches(artwork))
            .cloned()
            .collect()
    }
}

/// Formats a kebab-case subcategory tag for display.
///
/// `"birds-and-animals"` becomes `"Birds And Animals"`.
#[must_use]
pub fn format_subcategory(tag: &str) -> String {
    tag.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
