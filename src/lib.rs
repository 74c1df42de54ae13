// SPDX-License-Identifier: MPL-2.0
//! `print_gallery` browses an art-print catalog built with the Iced GUI framework.
//!
//! Murals, multi-panel and single-panel canvases are listed from CSV catalog
//! files, shown in a filterable thumbnail grid and enlarged in a lightbox
//! with keyboard, click and swipe navigation.
//!
//! # Layers
//!
//! - [`domain`] - artwork records, categories and subcategory filters
//! - [`application`] - the catalog port and sequence navigation
//! - [`gallery`] - toolkit-independent gallery state (grid, lightbox, loads)
//! - [`infrastructure`] - CSV catalog and image fetching adapters
//! - [`ui`] and [`app`] - Iced views and the application loop

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
