// SPDX-License-Identifier: MPL-2.0
//! Circular navigation over an ordered artwork sequence.
//!
//! [`ArtworkSequence`] is a borrowed view used by the lightbox and the
//! prefetch planner. Lookups go by [`ArtworkId`] rather than index so that a
//! sequence replaced underneath an open lightbox (a filter change) still
//! resolves to something sensible.

use crate::domain::artwork::{ArtworkId, ArtworkRecord};

/// Navigation state information for UI rendering.
///
/// A snapshot of where the lightbox stands inside the current sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Position of the current artwork (0-indexed), if it is in the sequence.
    pub current_index: Option<usize>,
    /// Total number of artworks in the sequence.
    pub total_count: usize,
    /// Whether next/previous controls should be offered.
    pub can_navigate: bool,
}

/// Read-only circular view over a slice of artworks.
#[derive(Debug, Clone, Copy)]
pub struct ArtworkSequence<'a> {
    artworks: &'a [ArtworkRecord],
}

impl<'a> ArtworkSequence<'a> {
    #[must_use]
    pub fn new(artworks: &'a [ArtworkRecord]) -> Self {
        Self { artworks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a ArtworkRecord> {
        self.artworks.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&'a ArtworkRecord> {
        self.artworks.last()
    }

    /// Returns the artwork with the given id.
    #[must_use]
    pub fn get(&self, id: &ArtworkId) -> Option<&'a ArtworkRecord> {
        let artworks = self.artworks;
        self.position_of(id).and_then(|index| artworks.get(index))
    }

    /// Returns the index of the artwork with the given id.
    #[must_use]
    pub fn position_of(&self, id: &ArtworkId) -> Option<usize> {
        self.artworks.iter().position(|artwork| artwork.id == *id)
    }

    /// Returns the artwork following `id`, wrapping to the first after the last.
    ///
    /// When `id` is not in the sequence the first artwork is returned.
    /// Returns `None` only for an empty sequence.
    #[must_use]
    pub fn next_after(&self, id: &ArtworkId) -> Option<&'a ArtworkRecord> {
        match self.position_of(id) {
            Some(index) => self.artworks.get((index + 1) % self.len()),
            None => self.first(),
        }
    }

    /// Returns the artwork preceding `id`, wrapping to the last before the first.
    ///
    /// When `id` is not in the sequence the last artwork is returned.
    /// Returns `None` only for an empty sequence.
    #[must_use]
    pub fn previous_before(&self, id: &ArtworkId) -> Option<&'a ArtworkRecord> {
        match self.position_of(id) {
            Some(index) => {
                let total = self.len();
                self.artworks.get((index + total - 1) % total)
            }
            None => self.last(),
        }
    }

    /// Returns the artworks within `radius` steps of `id` in both directions,
    /// nearest first, alternating next/previous. The artwork itself and
    /// duplicates (small circular sequences) are excluded.
    #[must_use]
    pub fn neighbours(&self, id: &ArtworkId, radius: usize) -> Vec<&'a ArtworkRecord> {
        let Some(index) = self.position_of(id) else {
            return Vec::new();
        };
        let artworks = self.artworks;
        let total = artworks.len();
        let mut seen = vec![index];
        let mut result = Vec::new();

        for step in 1..=radius.min(total) {
            let forward = (index + step) % total;
            let backward = (index + total - step % total) % total;
            for candidate in [forward, backward] {
                if !seen.contains(&candidate) {
                    seen.push(candidate);
                    result.push(&artworks[candidate]);
                }
            }
        }
        result
    }

    /// Returns a snapshot of the navigation state around `id`.
    #[must_use]
    pub fn navigation_info(&self, id: Option<&ArtworkId>) -> NavigationInfo {
        NavigationInfo {
            current_index: id.and_then(|id| self.position_of(id)),
            total_count: self.len(),
            can_navigate: self.len() > 1,
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

    #[test]
    fn next_wraps_to_first() {
        let artworks = records(&["1", "2", "3"]);
        let seq = ArtworkSequence::new(&artworks);
        assert_eq!(seq.next_after(&id("2")).unwrap().id, id("3"));
        assert_eq!(seq.next_after(&id("3")).unwrap().id, id("1"));
    }

    #[test]
    fn previous_wraps_to_last() {
        let artworks = records(&["1", "2", "3"]);
        let seq = ArtworkSequence::new(&artworks);
        assert_eq!(seq.previous_before(&id("1")).unwrap().id, id("3"));
        assert_eq!(seq.previous_before(&id("3")).unwrap().id, id("2"));
    }

    #[test]
    fn n_steps_return_to_start() {
        let artworks = records(&["a", "b", "c", "d", "e"]);
        let seq = ArtworkSequence::new(&artworks);
        for start in &artworks {
            let mut current = start.id.clone();
            for _ in 0..artworks.len() {
                current = seq.next_after(&current).unwrap().id.clone();
            }
            assert_eq!(current, start.id);

            for _ in 0..artworks.len() {
                current = seq.previous_before(&current).unwrap().id.clone();
            }
            assert_eq!(current, start.id);
        }
    }

    #[test]
    fn single_element_resolves_to_itself() {
        let artworks = records(&["only"]);
        let seq = ArtworkSequence::new(&artworks);
        assert_eq!(seq.next_after(&id("only")).unwrap().id, id("only"));
        assert_eq!(seq.previous_before(&id("only")).unwrap().id, id("only"));
        assert!(!seq.navigation_info(Some(&id("only"))).can_navigate);
    }

    #[test]
    fn missing_id_falls_back_to_ends() {
        let artworks = records(&["A", "B", "C"]);
        let seq = ArtworkSequence::new(&artworks);
        assert_eq!(seq.next_after(&id("D")).unwrap().id, id("A"));
        assert_eq!(seq.previous_before(&id("D")).unwrap().id, id("C"));
    }

    #[test]
    fn empty_sequence_yields_none() {
        let seq = ArtworkSequence::new(&[]);
        assert!(seq.next_after(&id("x")).is_none());
        assert!(seq.previous_before(&id("x")).is_none());
        assert!(seq.neighbours(&id("x"), 2).is_empty());
    }

    #[test]
    fn neighbours_alternate_and_skip_duplicates() {
        let artworks = records(&["1", "2", "3", "4", "5"]);
        let seq = ArtworkSequence::new(&artworks);
        let ids: Vec<_> = seq
            .neighbours(&id("1"), 2)
            .iter()
            .map(|a| a.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["2", "5", "3", "4"]);

        let small = records(&["1", "2"]);
        let seq = ArtworkSequence::new(&small);
        let ids: Vec<_> = seq.neighbours(&id("1"), 3).iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![id("2")]);
    }

    #[test]
    fn navigation_info_reports_position() {
        let artworks = records(&["1", "2", "3"]);
        let seq = ArtworkSequence::new(&artworks);
        let info = seq.navigation_info(Some(&id("2")));
        assert_eq!(info.current_index, Some(1));
        assert_eq!(info.total_count, 3);
        assert!(info.can_navigate);
        assert_eq!(seq.navigation_info(Some(&id("9"))).current_index, None);
    }
}
