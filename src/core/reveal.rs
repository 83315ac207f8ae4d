//! Fire-once bookkeeping for scroll reveal
//!
//! Elements are registered hidden; the first intersection report (the
//! observer applies the visibility threshold) reveals them and they are
//! never considered again.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    elements: HashMap<u32, RevealState>,
    next_id: u32,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new element and return its id
    pub fn register(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(id, RevealState::Hidden);
        id
    }

    /// Handle one intersection report.
    ///
    /// Returns `true` exactly once per element: the first time it is seen
    /// intersecting. The caller applies the animation and unobserves.
    pub fn on_intersection(&mut self, id: u32, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.elements.get_mut(&id) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: u32) -> Option<RevealState> {
        self.elements.get(&id).copied()
    }

    /// Number of elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.elements
            .values()
            .filter(|s| **s == RevealState::Hidden)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_hidden() {
        let mut tracker = RevealTracker::new();
        let a = tracker.register();
        let b = tracker.register();

        assert_ne!(a, b);
        assert_eq!(tracker.state(a), Some(RevealState::Hidden));
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn test_reveals_exactly_once() {
        let mut tracker = RevealTracker::new();
        let id = tracker.register();

        let mut reveals = 0;
        for visible in [false, true, false, true, true, false, true] {
            if tracker.on_intersection(id, visible) {
                reveals += 1;
            }
        }

        assert_eq!(reveals, 1);
        assert_eq!(tracker.state(id), Some(RevealState::Revealed));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_not_intersecting_does_nothing() {
        let mut tracker = RevealTracker::new();
        let id = tracker.register();

        assert!(!tracker.on_intersection(id, false));
        assert_eq!(tracker.state(id), Some(RevealState::Hidden));
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection(99, true));
        assert_eq!(tracker.state(99), None);
    }

    #[test]
    fn test_elements_are_independent() {
        let mut tracker = RevealTracker::new();
        let a = tracker.register();
        let b = tracker.register();

        assert!(tracker.on_intersection(a, true));
        assert_eq!(tracker.state(b), Some(RevealState::Hidden));
        assert!(tracker.on_intersection(b, true));
        assert!(!tracker.on_intersection(a, true));
    }
}
