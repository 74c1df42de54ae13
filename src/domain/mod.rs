// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no dependencies beyond `std`.
//!
//! # Modules
//!
//! - [`artwork`]: Artwork records ([`ArtworkRecord`](artwork::ArtworkRecord),
//!   [`ArtworkId`](artwork::ArtworkId), [`Category`](artwork::Category)) and
//!   subcategory filtering ([`SubcategoryFilter`](artwork::SubcategoryFilter))

pub mod artwork;
