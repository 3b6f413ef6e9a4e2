//! One-shot fade-in bookkeeping for elements entering the viewport.

use std::collections::BTreeSet;

/// Browsers may report a ratio a hair under the threshold that triggered
/// the callback.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Element ids still waiting for their entry animation.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    threshold: f64,
    pending: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching an element. Already-animated elements are not re-added
    /// by the caller because they are no longer observed.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.pending.insert(id.into());
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Handle an intersection report. Returns true if the element should
    /// get the `animate` class and stop being observed.
    pub fn on_intersection(&mut self, id: &str, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        let fired = self.pending.remove(id);
        if fired {
            tracing::debug!(id, "element revealed");
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_element() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("about");

        assert!(tracker.on_intersection("about", true, 0.5));
        assert!(!tracker.on_intersection("about", true, 0.9));
        assert!(!tracker.is_pending("about"));
    }

    #[test]
    fn leaving_viewport_does_not_fire() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("skills");

        assert!(!tracker.on_intersection("skills", false, 0.0));
        assert!(!tracker.on_intersection("skills", true, 0.05));
        assert!(tracker.is_pending("skills"));
        assert!(tracker.on_intersection("skills", true, 0.1));
    }

    #[test]
    fn ratio_just_under_threshold_still_fires() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("projects");

        assert!(tracker.on_intersection("projects", true, 0.0999));
        assert!(!tracker.is_pending("projects"));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(!tracker.on_intersection("nope", true, 1.0));
    }
}
