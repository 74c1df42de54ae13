// SPDX-License-Identifier: MPL-2.0
//! Image load tracking for grid tiles and the lightbox.
//!
//! Each artwork id moves through `NotRequested -> Loading -> Loaded`, with a
//! single optional detour through its fallback source when the primary
//! source fails. `Loaded` is terminal for the lifetime of the tracker: no
//! later event (a stale failure, navigation, the tile scrolling away) can
//! revert it. The tracker is owned by one gallery view and is simply
//! dropped or [`reset`](ImageLoadTracker::reset) on unmount.
//!
//! The payload type `T` is whatever the presentation layer needs to draw a
//! loaded image (an Iced handle in the application, `()` in tests).

use crate::domain::artwork::ArtworkId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default fade-in duration once an image has loaded.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

/// Load status of a single artwork image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load has been requested yet.
    #[default]
    NotRequested,
    /// A load is in flight.
    Loading {
        /// Whether the in-flight load targets the fallback source.
        using_fallback: bool,
    },
    /// The image finished loading. Never reverts.
    Loaded,
    /// Every available source failed; the slot stays in its placeholder state.
    Failed,
}

/// What the caller should do after reporting a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Retry once with the given fallback source.
    RetryWith(String),
    /// No source left; the slot shows the broken-image affordance.
    GaveUp,
    /// The failure arrived for a slot that is already loaded or failed.
    Ignored,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    status: LoadStatus,
    payload: Option<T>,
    loaded_at: Option<Instant>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::NotRequested,
            payload: None,
            loaded_at: None,
        }
    }
}

/// Tracks which artwork images have finished loading.
#[derive(Debug, Clone)]
pub struct ImageLoadTracker<T = ()> {
    slots: HashMap<ArtworkId, Slot<T>>,
    fade_duration: Duration,
}

impl<T> Default for ImageLoadTracker<T> {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_DURATION)
    }
}

impl<T> ImageLoadTracker<T> {
    /// Creates an empty tracker with the given fade-in duration.
    #[must_use]
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            slots: HashMap::new(),
            fade_duration,
        }
    }

    /// Returns the status for `id`; unknown ids are `NotRequested`.
    #[must_use]
    pub fn status(&self, id: &ArtworkId) -> LoadStatus {
        self.slots.get(id).map(|slot| slot.status).unwrap_or_default()
    }

    #[must_use]
    pub fn is_loaded(&self, id: &ArtworkId) -> bool {
        self.status(id) == LoadStatus::Loaded
    }

    /// Marks `id` as loading from its primary source.
    ///
    /// Returns `primary` when the caller should start a fetch, or `None`
    /// if the slot is already loading, loaded or failed.
    pub fn request(&mut self, id: &ArtworkId, primary: &str) -> Option<String> {
        let slot = self.slots.entry(id.clone()).or_default();
        match slot.status {
            LoadStatus::NotRequested => {
                slot.status = LoadStatus::Loading {
                    using_fallback: false,
                };
                Some(primary.to_string())
            }
            _ => None,
        }
    }

    /// Records a successful load. Returns `true` on the first transition to `Loaded`.
    pub fn mark_loaded(&mut self, id: &ArtworkId, payload: T) -> bool {
        self.mark_loaded_at(id, payload, Instant::now())
    }

    /// Like [`mark_loaded`](Self::mark_loaded) with an explicit timestamp.
    pub fn mark_loaded_at(&mut self, id: &ArtworkId, payload: T, now: Instant) -> bool {
        let slot = self.slots.entry(id.clone()).or_default();
        if slot.status == LoadStatus::Loaded {
            return false;
        }
        slot.status = LoadStatus::Loaded;
        slot.payload = Some(payload);
        slot.loaded_at = Some(now);
        true
    }

    /// Records a failed load and decides whether to fall back.
    ///
    /// The fallback is attempted at most once per id.
    pub fn mark_failed(&mut self, id: &ArtworkId, fallback: Option<&str>) -> FailureOutcome {
        let slot = self.slots.entry(id.clone()).or_default();
        match slot.status {
            LoadStatus::Loaded | LoadStatus::Failed => FailureOutcome::Ignored,
            LoadStatus::Loading {
                using_fallback: true,
            } => {
                slot.status = LoadStatus::Failed;
                FailureOutcome::GaveUp
            }
            LoadStatus::NotRequested
            | LoadStatus::Loading {
                using_fallback: false,
            } => match fallback.filter(|url| !url.trim().is_empty()) {
                Some(url) => {
                    slot.status = LoadStatus::Loading {
                        using_fallback: true,
                    };
                    FailureOutcome::RetryWith(url.to_string())
                }
                None => {
                    slot.status = LoadStatus::Failed;
                    FailureOutcome::GaveUp
                }
            },
        }
    }

    /// Returns the payload of a loaded image.
    #[must_use]
    pub fn payload(&self, id: &ArtworkId) -> Option<&T> {
        self.slots.get(id).and_then(|slot| slot.payload.as_ref())
    }

    /// Opacity of the image for a fade-in, from 0.0 (placeholder) to 1.0.
    #[must_use]
    pub fn opacity(&self, id: &ArtworkId, now: Instant) -> f32 {
        let Some(loaded_at) = self.slots.get(id).and_then(|slot| slot.loaded_at) else {
            return 0.0;
        };
        if self.fade_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(loaded_at);
        (elapsed.as_secs_f32() / self.fade_duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Returns `true` while any loaded image is still fading in.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.slots.values().any(|slot| {
            slot.loaded_at
                .is_some_and(|at| now.saturating_duration_since(at) < self.fade_duration)
        })
    }

    /// Number of ids in the `Loaded` state.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.status == LoadStatus::Loaded)
            .count()
    }

    /// Forgets every slot. Used when the gallery view is torn down.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ArtworkId {
        ArtworkId::new(value)
    }

    #[test]
    fn unknown_id_is_not_loaded() {
        let tracker: ImageLoadTracker = ImageLoadTracker::default();
        assert_eq!(tracker.status(&id("a")), LoadStatus::NotRequested);
        assert!(!tracker.is_loaded(&id("a")));
    }

    #[test]
    fn request_only_once() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        assert_eq!(tracker.request(&id("a"), "/a.jpg"), Some("/a.jpg".into()));
        assert_eq!(tracker.request(&id("a"), "/a.jpg"), None);
        assert_eq!(
            tracker.status(&id("a")),
            LoadStatus::Loading {
                using_fallback: false
            }
        );
    }

    #[test]
    fn loaded_transitions_exactly_once() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");
        assert!(tracker.mark_loaded(&id("a"), ()));
        assert!(!tracker.mark_loaded(&id("a"), ()));
        assert_eq!(tracker.loaded_count(), 1);
    }

    #[test]
    fn loaded_never_reverts() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");
        tracker.mark_loaded(&id("a"), ());

        assert_eq!(
            tracker.mark_failed(&id("a"), Some("/fallback.jpg")),
            FailureOutcome::Ignored
        );
        assert_eq!(tracker.request(&id("a"), "/a.jpg"), None);
        assert!(tracker.is_loaded(&id("a")));
    }

    #[test]
    fn fallback_is_attempted_once() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");

        assert_eq!(
            tracker.mark_failed(&id("a"), Some("/fallback.jpg")),
            FailureOutcome::RetryWith("/fallback.jpg".into())
        );
        assert_eq!(
            tracker.mark_failed(&id("a"), Some("/fallback.jpg")),
            FailureOutcome::GaveUp
        );
        assert_eq!(tracker.status(&id("a")), LoadStatus::Failed);
        assert_eq!(
            tracker.mark_failed(&id("a"), Some("/fallback.jpg")),
            FailureOutcome::Ignored
        );
    }

    #[test]
    fn failure_without_fallback_gives_up() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");
        assert_eq!(tracker.mark_failed(&id("a"), None), FailureOutcome::GaveUp);
        assert_eq!(tracker.mark_failed(&id("b"), Some("  ")), FailureOutcome::GaveUp);
    }

    #[test]
    fn fallback_success_loads() {
        let mut tracker: ImageLoadTracker<&'static str> = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");
        tracker.mark_failed(&id("a"), Some("/fallback.jpg"));
        assert!(tracker.mark_loaded(&id("a"), "fallback-pixels"));
        assert_eq!(tracker.payload(&id("a")), Some(&"fallback-pixels"));
    }

    #[test]
    fn failures_are_isolated_per_id() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.request(&id("a"), "/a.jpg");
        tracker.request(&id("b"), "/b.jpg");
        tracker.mark_failed(&id("a"), None);
        tracker.mark_loaded(&id("b"), ());
        assert_eq!(tracker.status(&id("a")), LoadStatus::Failed);
        assert!(tracker.is_loaded(&id("b")));
    }

    #[test]
    fn opacity_ramps_over_fade_duration() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::new(Duration::from_millis(200));
        let start = Instant::now();
        assert_eq!(tracker.opacity(&id("a"), start), 0.0);

        tracker.mark_loaded_at(&id("a"), (), start);
        let halfway = tracker.opacity(&id("a"), start + Duration::from_millis(100));
        assert!((halfway - 0.5).abs() < 0.01);
        assert!(tracker.is_fading(start + Duration::from_millis(100)));

        assert_eq!(tracker.opacity(&id("a"), start + Duration::from_secs(1)), 1.0);
        assert!(!tracker.is_fading(start + Duration::from_secs(1)));
    }

    #[test]
    fn zero_fade_is_immediately_opaque() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::new(Duration::ZERO);
        let now = Instant::now();
        tracker.mark_loaded_at(&id("a"), (), now);
        assert_eq!(tracker.opacity(&id("a"), now), 1.0);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut tracker: ImageLoadTracker = ImageLoadTracker::default();
        tracker.mark_loaded(&id("a"), ());
        tracker.reset();
        assert_eq!(tracker.loaded_count(), 0);
        assert!(!tracker.is_loaded(&id("a")));
    }
}
