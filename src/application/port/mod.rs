// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Artwork catalog access per category
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so providers can be shared behind an `Arc`
//! - Async methods return boxed `'static` futures so callers can hand them
//!   straight to Iced's `Task::perform`

pub mod catalog;

pub use catalog::{CatalogError, CatalogFuture, CatalogProvider};
