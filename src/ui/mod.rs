// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each owns
//! its state, renders from it and returns tasks or events to the application.
//!
//! # Screens
//!
//! - [`home`] - Featured artworks and category shortcuts
//! - [`gallery`] - Category grid, subcategory filter and lightbox
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation bar
//! - [`widgets`] - Custom Iced widgets (spinner, scroll-lockable wrapper)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod styles;
pub mod widgets;
