// SPDX-License-Identifier: MPL-2.0
//! Single-touch swipe interpretation.
//!
//! A swipe starts at the horizontal coordinate of the first finger. Each move
//! compares the current coordinate against that start; once the displacement
//! reaches the threshold one [`SwipeDirection`] is reported and the start is
//! cleared, so a single continuous drag navigates at most once. A second
//! simultaneous finger cancels the gesture until every finger is lifted.

use std::collections::BTreeSet;

/// Default minimum horizontal displacement, in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next artwork.
    Next,
    /// Finger moved right: show the previous artwork.
    Previous,
}

/// Tracks one swipe gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
    fingers: BTreeSet<u64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
            fingers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns `true` while a single-finger gesture can still fire.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// A finger touched down at horizontal position `x`.
    pub fn touch_start(&mut self, finger: u64, x: f32) {
        self.fingers.insert(finger);
        if self.fingers.len() == 1 {
            self.start_x = Some(x);
        } else {
            self.start_x = None;
        }
    }

    /// A finger moved to horizontal position `x`.
    pub fn touch_move(&mut self, finger: u64, x: f32) -> Option<SwipeDirection> {
        if self.fingers.len() != 1 || !self.fingers.contains(&finger) {
            return None;
        }
        let start = self.start_x?;
        let delta = start - x;
        if delta.abs() < self.threshold {
            return None;
        }
        self.start_x = None;
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// A finger was lifted or lost.
    pub fn touch_end(&mut self, finger: u64) {
        self.fingers.remove(&finger);
        self.start_x = None;
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.fingers.clear();
        self.start_x = None;
    }
}
