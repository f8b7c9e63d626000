//! Input adapters: every gesture, key press and click becomes a [`NavCommand`].

/// Horizontal travel (px) a swipe must exceed to count as navigation.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
}

/// Tracks one touch gesture from start to end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    end_x: f64,
    dragging: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        // A tap without movement must not read as a swipe from `x` to 0.
        self.end_x = x;
        self.dragging = true;
    }

    pub fn track(&mut self, x: f64) {
        if self.dragging {
            self.end_x = x;
        }
    }

    /// Finish the gesture. State resets whether or not it navigated.
    pub fn finish(&mut self) -> Option<NavCommand> {
        if !self.dragging {
            return None;
        }
        let delta = self.start_x - self.end_x;
        *self = Self::default();
        command_for_swipe(delta)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Positive delta is a leftward swipe (finger moved towards smaller x).
pub fn command_for_swipe(delta: f64) -> Option<NavCommand> {
    if delta.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if delta > 0.0 {
        Some(NavCommand::Next)
    } else {
        Some(NavCommand::Previous)
    }
}

/// `KeyboardEvent.key` → command; only the horizontal arrows navigate.
pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowLeft" => Some(NavCommand::Previous),
        "ArrowRight" => Some(NavCommand::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f64, to: f64) -> Option<NavCommand> {
        let mut tracker = SwipeTracker::default();
        tracker.begin(from);
        tracker.track(to);
        tracker.finish()
    }

    #[test]
    fn swipe_thresholds() {
        assert_eq!(swipe(200.0, 140.0), Some(NavCommand::Next));
        assert_eq!(swipe(200.0, 170.0), None);
        assert_eq!(swipe(140.0, 200.0), Some(NavCommand::Previous));
        assert_eq!(command_for_swipe(50.0), None);
        assert_eq!(command_for_swipe(50.5), Some(NavCommand::Next));
    }

    #[test]
    fn tap_does_not_navigate() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn state_resets_after_every_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0);
        tracker.track(90.0);
        assert_eq!(tracker.finish(), None);
        assert_eq!(tracker, SwipeTracker::default());

        tracker.begin(300.0);
        tracker.track(100.0);
        assert_eq!(tracker.finish(), Some(NavCommand::Next));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn moves_without_a_start_are_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.track(500.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn only_horizontal_arrows_navigate() {
        assert_eq!(command_for_key("ArrowLeft"), Some(NavCommand::Previous));
        assert_eq!(command_for_key("ArrowRight"), Some(NavCommand::Next));
        assert_eq!(command_for_key("ArrowUp"), None);
        assert_eq!(command_for_key("Enter"), None);
    }
}
