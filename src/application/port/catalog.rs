// SPDX-License-Identifier: MPL-2.0
//! Catalog provider port.
//!
//! The gallery consumes ordered artwork sequences per [`Category`] and never
//! cares where they come from. Infrastructure adapters (CSV files on disk or
//! over HTTP) implement [`CatalogProvider`].

use crate::domain::artwork::{ArtworkRecord, Category};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// CatalogError
// =============================================================================

/// Errors that can occur while reading a catalog source.
///
/// Adapters use these internally to decide that a subcategory contributes
/// nothing; a whole-catalog call only fails when the source root itself is
/// unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested data file does not exist.
    NotFound(String),

    /// The source could not be reached or read.
    Unavailable(String),

    /// The data was read but could not be interpreted.
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(what) => write!(f, "Catalog data not found: {what}"),
            CatalogError::Unavailable(msg) => write!(f, "Catalog source unavailable: {msg}"),
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog data: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Boxed future returned by catalog operations.
pub type CatalogFuture<T> = BoxFuture<'static, Result<T, CatalogError>>;

// =============================================================================
// CatalogProvider Trait
// =============================================================================

/// Supplies ordered artwork sequences per category.
///
/// Calls must be safe to repeat; implementations should answer from a cache
/// after the first successful load. An empty sequence is a valid result.
pub trait CatalogProvider: Send + Sync {
    /// Lists every artwork of the category in navigation order.
    fn list_artworks(&self, category: Category) -> CatalogFuture<Vec<ArtworkRecord>>;

    /// Lists the subcategory tags of the category in display order.
    fn list_categories(&self, category: Category) -> CatalogFuture<Vec<String>>;

    /// Lists artworks flagged for homepage highlighting, across all categories.
    fn list_featured(&self) -> CatalogFuture<Vec<ArtworkRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_variants() {
        assert_eq!(
            CatalogError::NotFound("murals/nature.csv".into()).to_string(),
            "Catalog data not found: murals/nature.csv"
        );
        assert!(CatalogError::Unavailable("timeout".into())
            .to_string()
            .contains("timeout"));
        assert!(CatalogError::Malformed("bad utf-8".into())
            .to_string()
            .starts_with("Malformed"));
    }
}
