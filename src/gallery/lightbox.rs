// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigator: the modal viewer's state machine.
//!
//! ```text
//!            open_at(id)                  next / previous
//!   Closed ─────────────▶ Open(id) ◀──────────────────────┐
//!     ▲                      │  └──────────────────────────┘
//!     └──────── close ───────┘
//! ```
//!
//! The navigator never stores the artwork sequence. Every transition reads
//! the sequence the caller passes in, so a filter change while the lightbox
//! is open is handled by the fallback rules of [`ArtworkSequence`]: `next`
//! on a vanished id lands on the first artwork, `previous` on the last, and
//! an emptied sequence closes the lightbox.
//!
//! Opening acquires the shared [`ScrollLock`]; every path back to `Closed`
//! releases it exactly once.

use super::gesture::{SwipeDirection, SwipeTracker};
use super::scroll_lock::{ScrollEffect, ScrollLock};
use crate::application::query::{ArtworkSequence, NavigationInfo};
use crate::domain::artwork::{ArtworkId, ArtworkRecord};

/// Lightbox state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(ArtworkId),
}

/// Keys the lightbox reacts to. Everything else is filtered out by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Raw single-finger touch input, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Start { finger: u64, x: f32 },
    Move { finger: u64, x: f32 },
    End { finger: u64 },
}

/// Outcome of a lightbox transition.
#[derive(Debug, Clone, PartialEq)]
pub enum LightboxEffect {
    /// The input had no effect.
    None,
    /// The lightbox opened on `id`.
    Opened { id: ArtworkId, scroll: ScrollEffect },
    /// The lightbox now shows `id`.
    Moved(ArtworkId),
    /// The lightbox closed.
    Closed { scroll: ScrollEffect },
}

impl LightboxEffect {
    /// Artwork now on display, if the transition changed it.
    #[must_use]
    pub fn shown(&self) -> Option<&ArtworkId> {
        match self {
            LightboxEffect::Opened { id, .. } | LightboxEffect::Moved(id) => Some(id),
            LightboxEffect::None | LightboxEffect::Closed { .. } => None,
        }
    }
}

/// Modal viewer state machine.
#[derive(Debug, Clone, Default)]
pub struct LightboxNavigator {
    state: LightboxState,
    swipe: SwipeTracker,
}

impl LightboxNavigator {
    /// Creates a closed navigator with the given swipe threshold (logical pixels).
    #[must_use]
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            state: LightboxState::Closed,
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    #[must_use]
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&ArtworkId> {
        match &self.state {
            LightboxState::Open(id) => Some(id),
            LightboxState::Closed => None,
        }
    }

    /// Looks up the displayed artwork in `artworks`.
    #[must_use]
    pub fn current<'a>(&self, artworks: &'a [ArtworkRecord]) -> Option<&'a ArtworkRecord> {
        self.current_id()
            .and_then(|id| ArtworkSequence::new(artworks).get(id))
    }

    /// Whether next/previous controls should be shown.
    #[must_use]
    pub fn shows_controls(&self, artworks: &[ArtworkRecord]) -> bool {
        self.is_open() && artworks.len() > 1
    }

    #[must_use]
    pub fn navigation_info(&self, artworks: &[ArtworkRecord]) -> NavigationInfo {
        ArtworkSequence::new(artworks).navigation_info(self.current_id())
    }

    /// Opens the lightbox on `id`.
    ///
    /// Does nothing when `id` is not part of `artworks` (which covers the
    /// empty sequence). When already open, switches to `id` without touching
    /// the scroll lock.
    pub fn open_at(
        &mut self,
        id: &ArtworkId,
        artworks: &[ArtworkRecord],
        lock: &mut ScrollLock,
        scrollbar_width: f32,
    ) -> LightboxEffect {
        if ArtworkSequence::new(artworks).position_of(id).is_none() {
            log::debug!("Ignoring lightbox open for unknown artwork {id}");
            return LightboxEffect::None;
        }

        match &self.state {
            LightboxState::Open(current) if current == id => LightboxEffect::None,
            LightboxState::Open(_) => {
                self.state = LightboxState::Open(id.clone());
                LightboxEffect::Moved(id.clone())
            }
            LightboxState::Closed => {
                let scroll = lock.acquire(scrollbar_width);
                self.swipe.reset();
                self.state = LightboxState::Open(id.clone());
                LightboxEffect::Opened {
                    id: id.clone(),
                    scroll,
                }
            }
        }
    }

    /// Closes the lightbox and releases the scroll lock.
    pub fn close(&mut self, lock: &mut ScrollLock) -> LightboxEffect {
        if !self.is_open() {
            return LightboxEffect::None;
        }
        self.state = LightboxState::Closed;
        self.swipe.reset();
        LightboxEffect::Closed {
            scroll: lock.release(),
        }
    }

    /// Shows the artwork after the current one, wrapping around.
    pub fn next(&mut self, artworks: &[ArtworkRecord], lock: &mut ScrollLock) -> LightboxEffect {
        self.step(artworks, lock, SwipeDirection::Next)
    }

    /// Shows the artwork before the current one, wrapping around.
    pub fn previous(
        &mut self,
        artworks: &[ArtworkRecord],
        lock: &mut ScrollLock,
    ) -> LightboxEffect {
        self.step(artworks, lock, SwipeDirection::Previous)
    }

    fn step(
        &mut self,
        artworks: &[ArtworkRecord],
        lock: &mut ScrollLock,
        direction: SwipeDirection,
    ) -> LightboxEffect {
        let LightboxState::Open(current) = &self.state else {
            return LightboxEffect::None;
        };

        let sequence = ArtworkSequence::new(artworks);
        let target = match direction {
            SwipeDirection::Next => sequence.next_after(current),
            SwipeDirection::Previous => sequence.previous_before(current),
        };

        match target {
            None => self.close(lock),
            Some(artwork) if artwork.id == *current => LightboxEffect::None,
            Some(artwork) => {
                self.state = LightboxState::Open(artwork.id.clone());
                LightboxEffect::Moved(artwork.id.clone())
            }
        }
    }

    /// Applies a key press. Inert while closed.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        artworks: &[ArtworkRecord],
        lock: &mut ScrollLock,
    ) -> LightboxEffect {
        if !self.is_open() {
            return LightboxEffect::None;
        }
        match key {
            NavKey::ArrowLeft => self.previous(artworks, lock),
            NavKey::ArrowRight => self.next(artworks, lock),
            NavKey::Escape => self.close(lock),
        }
    }

    /// Feeds touch input into the swipe tracker. Inert while closed.
    pub fn handle_touch(
        &mut self,
        input: TouchInput,
        artworks: &[ArtworkRecord],
        lock: &mut ScrollLock,
    ) -> LightboxEffect {
        if !self.is_open() {
            return LightboxEffect::None;
        }
        match input {
            TouchInput::Start { finger, x } => {
                self.swipe.touch_start(finger, x);
                LightboxEffect::None
            }
            TouchInput::Move { finger, x } => match self.swipe.touch_move(finger, x) {
                Some(direction) => self.step(artworks, lock, direction),
                None => LightboxEffect::None,
            },
            TouchInput::End { finger } => {
                self.swipe.touch_end(finger);
                LightboxEffect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::Category;

    fn records(ids: &[&str]) -> Vec<ArtworkRecord> {
        ids.iter()
            .map(|id| ArtworkRecord::new(*id, format!("/{id}.jpg"), Category::Mural, "nature"))
            .collect()
    }

    fn id(value: &str) -> ArtworkId {
        ArtworkId::new(value)
    }

    fn opened(artworks: &[ArtworkRecord], at: &str) -> (LightboxNavigator, ScrollLock) {
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();
        lightbox.open_at(&id(at), artworks, &mut lock, 0.0);
        (lightbox, lock)
    }

    #[test]
    fn open_acquires_scroll_lock() {
        let artworks = records(&["1", "2"]);
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();

        let effect = lightbox.open_at(&id("2"), &artworks, &mut lock, 15.0);
        assert_eq!(
            effect,
            LightboxEffect::Opened {
                id: id("2"),
                scroll: ScrollEffect::Lock { compensation: 15.0 }
            }
        );
        assert!(lock.is_locked());
        assert_eq!(lightbox.current_id(), Some(&id("2")));
    }

    #[test]
    fn empty_sequence_does_not_open() {
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();
        assert_eq!(
            lightbox.open_at(&id("1"), &[], &mut lock, 0.0),
            LightboxEffect::None
        );
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn reopening_while_open_moves_without_relocking() {
        let artworks = records(&["1", "2", "3"]);
        let (mut lightbox, mut lock) = opened(&artworks, "1");
        assert_eq!(
            lightbox.open_at(&id("3"), &artworks, &mut lock, 0.0),
            LightboxEffect::Moved(id("3"))
        );
        assert_eq!(lock.holders(), 1);
    }

    #[test]
    fn keyboard_is_inert_when_closed() {
        let artworks = records(&["1", "2", "3"]);
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();
        for key in [NavKey::ArrowLeft, NavKey::ArrowRight, NavKey::Escape] {
            assert_eq!(
                lightbox.handle_key(key, &artworks, &mut lock),
                LightboxEffect::None
            );
        }
        assert_eq!(lightbox.state(), &LightboxState::Closed);
        assert_eq!(lock.release(), ScrollEffect::None);
    }

    #[test]
    fn end_to_end_keyboard_scenario() {
        let artworks = records(&["1", "2", "3"]);
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();

        lightbox.open_at(&id("2"), &artworks, &mut lock, 0.0);
        assert_eq!(lightbox.current_id(), Some(&id("2")));

        lightbox.handle_key(NavKey::ArrowRight, &artworks, &mut lock);
        assert_eq!(lightbox.current_id(), Some(&id("3")));

        lightbox.handle_key(NavKey::ArrowRight, &artworks, &mut lock);
        assert_eq!(lightbox.current_id(), Some(&id("1")));

        let effect = lightbox.handle_key(NavKey::Escape, &artworks, &mut lock);
        assert_eq!(
            effect,
            LightboxEffect::Closed {
                scroll: ScrollEffect::Unlock
            }
        );
        assert_eq!(lightbox.state(), &LightboxState::Closed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn circular_navigation_returns_to_start() {
        let artworks = records(&["a", "b", "c", "d"]);
        for start in ["a", "b", "c", "d"] {
            let (mut lightbox, mut lock) = opened(&artworks, start);
            for _ in 0..artworks.len() {
                lightbox.next(&artworks, &mut lock);
            }
            assert_eq!(lightbox.current_id(), Some(&id(start)));
            for _ in 0..artworks.len() {
                lightbox.previous(&artworks, &mut lock);
            }
            assert_eq!(lightbox.current_id(), Some(&id(start)));
        }
    }

    #[test]
    fn single_item_navigation_is_stable() {
        let artworks = records(&["only"]);
        let (mut lightbox, mut lock) = opened(&artworks, "only");
        assert_eq!(lightbox.next(&artworks, &mut lock), LightboxEffect::None);
        assert_eq!(lightbox.previous(&artworks, &mut lock), LightboxEffect::None);
        assert_eq!(lightbox.current_id(), Some(&id("only")));
        assert!(!lightbox.shows_controls(&artworks));
    }

    #[test]
    fn missing_id_falls_back_to_sequence_ends() {
        let original = records(&["A", "B", "C", "D"]);
        let filtered = records(&["A", "B", "C"]);

        let (mut lightbox, mut lock) = opened(&original, "D");
        assert_eq!(
            lightbox.next(&filtered, &mut lock),
            LightboxEffect::Moved(id("A"))
        );

        let (mut lightbox, mut lock) = opened(&original, "D");
        assert_eq!(
            lightbox.previous(&filtered, &mut lock),
            LightboxEffect::Moved(id("C"))
        );
    }

    #[test]
    fn emptied_sequence_closes_and_unlocks() {
        let artworks = records(&["1", "2"]);
        let (mut lightbox, mut lock) = opened(&artworks, "1");
        let effect = lightbox.next(&[], &mut lock);
        assert_eq!(
            effect,
            LightboxEffect::Closed {
                scroll: ScrollEffect::Unlock
            }
        );
        assert!(!lock.is_locked());
    }

    #[test]
    fn swipe_navigates_once_per_gesture() {
        let artworks = records(&["1", "2", "3"]);
        let (mut lightbox, mut lock) = opened(&artworks, "1");

        lightbox.handle_touch(TouchInput::Start { finger: 0, x: 300.0 }, &artworks, &mut lock);
        assert_eq!(
            lightbox.handle_touch(TouchInput::Move { finger: 0, x: 251.0 }, &artworks, &mut lock),
            LightboxEffect::None
        );
        assert_eq!(
            lightbox.handle_touch(TouchInput::Move { finger: 0, x: 250.0 }, &artworks, &mut lock),
            LightboxEffect::Moved(id("2"))
        );
        assert_eq!(
            lightbox.handle_touch(TouchInput::Move { finger: 0, x: 100.0 }, &artworks, &mut lock),
            LightboxEffect::None
        );
        assert_eq!(lightbox.current_id(), Some(&id("2")));

        lightbox.handle_touch(TouchInput::End { finger: 0 }, &artworks, &mut lock);
        lightbox.handle_touch(TouchInput::Start { finger: 0, x: 100.0 }, &artworks, &mut lock);
        assert_eq!(
            lightbox.handle_touch(TouchInput::Move { finger: 0, x: 180.0 }, &artworks, &mut lock),
            LightboxEffect::Moved(id("1"))
        );
    }

    #[test]
    fn touch_is_ignored_when_closed() {
        let artworks = records(&["1", "2"]);
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();
        lightbox.handle_touch(TouchInput::Start { finger: 0, x: 300.0 }, &artworks, &mut lock);
        assert_eq!(
            lightbox.handle_touch(TouchInput::Move { finger: 0, x: 0.0 }, &artworks, &mut lock),
            LightboxEffect::None
        );
    }

    #[test]
    fn lock_and_unlock_effects_balance() {
        let artworks = records(&["1", "2", "3"]);
        let mut lightbox = LightboxNavigator::default();
        let mut lock = ScrollLock::new();
        let mut locks = 0;
        let mut unlocks = 0;

        let script = ["open", "open", "close", "close", "open", "close", "open"];
        for step in script {
            let effect = match step {
                "open" => lightbox.open_at(&id("2"), &artworks, &mut lock, 0.0),
                _ => lightbox.close(&mut lock),
            };
            match effect {
                LightboxEffect::Opened {
                    scroll: ScrollEffect::Lock { .. },
                    ..
                } => locks += 1,
                LightboxEffect::Closed {
                    scroll: ScrollEffect::Unlock,
                } => unlocks += 1,
                _ => {}
            }
        }

        assert_eq!(locks, 3);
        assert_eq!(unlocks, 2);
        assert_eq!(lightbox.is_open(), lock.is_locked());

        lightbox.close(&mut lock);
        assert!(!lock.is_locked());
    }
}
