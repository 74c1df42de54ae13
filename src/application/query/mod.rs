// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! # Available Services
//!
//! - [`navigation`]: Circular navigation over an artwork sequence ([`ArtworkSequence`])

pub mod navigation;

pub use navigation::{ArtworkSequence, NavigationInfo};
