//! Selection highlight tracking
//!
//! Moving the selected day is a two-step transition: turn the old day's
//! highlight off, turn the new one on. Hosts apply the returned
//! [`HighlightChange`] to exactly those two cells instead of redrawing
//! the whole grid.

/// The cells a host flips when the selection moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightChange {
    /// Day whose highlight turns off, if one was selected before.
    pub clear: Option<u8>,
    /// Day whose highlight turns on.
    pub set: u8,
}

/// Remembers which day was highlighted before the last selection event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    previous: Option<u8>,
}

impl SelectionTracker {
    /// Tracker with no prior selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that considers `day` already highlighted.
    pub fn with_selected(day: u8) -> Self {
        Self {
            previous: Some(day),
        }
    }

    /// The currently remembered day, if any.
    pub fn selected(&self) -> Option<u8> {
        self.previous
    }

    /// Move the selection to `day` and report which highlights change.
    pub fn select(&mut self, day: u8) -> HighlightChange {
        let change = HighlightChange {
            clear: self.previous,
            set: day,
        };
        self.previous = Some(day);
        change
    }

    /// Forget the remembered day, e.g. when the host rebuilds its grid.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_selection_clears_nothing() {
        let mut tracker = SelectionTracker::new();
        let change = tracker.select(14);
        assert_eq!(change, HighlightChange { clear: None, set: 14 });
        assert_eq!(tracker.selected(), Some(14));
    }

    #[test]
    fn moving_selection_clears_previous() {
        let mut tracker = SelectionTracker::with_selected(3);
        let change = tracker.select(21);
        assert_eq!(
            change,
            HighlightChange {
                clear: Some(3),
                set: 21
            }
        );
        assert_eq!(tracker.selected(), Some(21));
    }

    #[test]
    fn reselecting_same_day_still_flips_it() {
        // Matches the off-then-on sequence hosts apply: the cell is
        // cleared and immediately re-highlighted.
        let mut tracker = SelectionTracker::with_selected(7);
        let change = tracker.select(7);
        assert_eq!(change, HighlightChange { clear: Some(7), set: 7 });
    }

    #[test]
    fn reset_forgets_selection() {
        let mut tracker = SelectionTracker::with_selected(7);
        tracker.reset();
        assert_eq!(tracker.selected(), None);
        let change = tracker.select(2);
        assert_eq!(change.clear, None);
    }
}
