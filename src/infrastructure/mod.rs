// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the I/O the presentation layer needs directly.
//!
//! # Available Adapters
//!
//! - [`catalog`]: CSV catalog files on disk or over HTTP (implements [`CatalogProvider`])
//! - [`image`]: artwork image fetching and URL size hints
//!
//! [`CatalogProvider`]: crate::application::port::CatalogProvider

pub mod catalog;
pub mod image;

pub use catalog::{CatalogSource, CsvCatalogProvider};
pub use image::{load_image, with_size_hint, LoadedImage};
