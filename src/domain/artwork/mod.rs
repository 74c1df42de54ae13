// SPDX-License-Identifier: MPL-2.0
//! Artwork domain types: records, categories and subcategory filters.

mod filter;
mod types;

pub use filter::{format_subcategory, SubcategoryFilter};
pub use types::{ArtworkId, ArtworkRecord, Category};
