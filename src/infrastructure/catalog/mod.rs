// SPDX-License-Identifier: MPL-2.0
//! CSV catalog adapter implementing the [`CatalogProvider`] port.
//!
//! [`CatalogProvider`]: crate::application::port::CatalogProvider

pub mod csv;
mod provider;
pub mod source;

pub use provider::CsvCatalogProvider;
pub use source::CatalogSource;
