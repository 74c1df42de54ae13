// SPDX-License-Identifier: MPL-2.0
//! Gallery page: filter bar, thumbnail grid and lightbox overlay.

pub mod component;
mod filter_bar;
mod grid_view;
mod lightbox_view;
mod status;

pub use component::{ImageSlot, Message, Phase, Services, State, ViewEnv};
