//! Cosmetic page behaviour: header padding on scroll, the mobile menu
//! toggle, and reveal-on-scroll animation classes.

use std::collections::BTreeSet;
use tracing::trace;

use crate::constants::{HEADER_SCROLL_THRESHOLD, REVEAL_THRESHOLD, classes, elements};
use crate::surface::Surface;

/// Compact header padding once the page is scrolled past the threshold.
pub fn apply_header_style<S: Surface>(surface: &mut S, scroll_y: f64) {
    if scroll_y > HEADER_SCROLL_THRESHOLD {
        surface.add_class(elements::HEADER, classes::HEADER_COMPACT);
        surface.remove_class(elements::HEADER, classes::HEADER_RELAXED);
    } else {
        surface.add_class(elements::HEADER, classes::HEADER_RELAXED);
        surface.remove_class(elements::HEADER, classes::HEADER_COMPACT);
    }
}

/// Opens or closes the mobile menu. Returns the new open state, or `None`
/// when the page has no menu toggle or no menu.
pub fn toggle_mobile_menu<S: Surface>(surface: &mut S) -> Option<bool> {
    if !surface.contains(elements::MENU_TOGGLE) {
        return None;
    }
    surface.toggle_class(elements::MOBILE_MENU, classes::ACTIVE)
}

/// Tracks elements waiting to be revealed when they scroll into view.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: BTreeSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
        }
    }

    /// Observes every element already carrying the `reveal` class.
    pub fn setup<S: Surface>(surface: &S) -> Self {
        let mut tracker = Self::default();
        for id in surface.ids_with_class(classes::REVEAL) {
            tracker.observe(id);
        }
        tracker
    }

    pub fn observe(&mut self, id: impl Into<String>) {
        self.observed.insert(id.into());
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Handles an intersection report. Observed elements that are visible by
    /// at least the threshold get `active`; returns whether that happened.
    pub fn on_intersect<S: Surface>(&self, surface: &mut S, id: &str, ratio: f64) -> bool {
        if !self.is_observed(id) || ratio < self.threshold {
            return false;
        }
        trace!(id, ratio, "Revealing element");
        surface.add_class(id, classes::ACTIVE);
        true
    }
}
