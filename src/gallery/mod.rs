// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent gallery state.
//!
//! Everything in this module is plain data plus transitions: the grid model,
//! the lightbox state machine, image load tracking, swipe interpretation, the
//! shared scroll lock and prefetch planning. The Iced views in
//! [`crate::ui::gallery`] render this state and translate native events into
//! calls on it.

pub mod gesture;
pub mod grid;
pub mod lightbox;
pub mod load_tracker;
pub mod prefetch;
pub mod scroll_lock;

pub use gesture::{SwipeDirection, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use grid::{GalleryGrid, GridBreakpoints, GridTile};
pub use lightbox::{LightboxEffect, LightboxNavigator, LightboxState, NavKey, TouchInput};
pub use load_tracker::{FailureOutcome, ImageLoadTracker, LoadStatus};
pub use prefetch::{ImagePrefetchCache, PrefetchConfig, PrefetchPlanner, PrefetchRequest};
pub use scroll_lock::{ScrollEffect, ScrollLock};
