//! Slide index state machine.

use super::input::NavCommand;

/// Current slide within a fixed number of slides.
///
/// `total == 0` is a valid, inert state: nothing is shown and every
/// navigation call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Jump to `index`, clamped into range. Returns whether the slide changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = index.min(self.total - 1);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::GoTo(index) => self.go_to(index),
        }
    }

    /// Track offset for `translateX(-N%)`.
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// 1-based position for the "N / total" counter; 0 when there are no slides.
    pub fn position(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.current + 1
        }
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.is_empty() || self.current == self.total - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_clamps_into_range() {
        for total in 1..6 {
            for index in 0..10 {
                let mut carousel = Carousel::new(total);
                carousel.go_to(index);
                assert_eq!(carousel.current(), index.min(total - 1));
            }
        }
    }

    #[test]
    fn go_to_reports_changes() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.go_to(2));
        assert!(!carousel.go_to(2));
        assert!(carousel.go_to(usize::MAX));
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn next_then_previous_returns_to_interior_index() {
        let total = 6;
        for start in 1..total - 1 {
            let mut carousel = Carousel::new(total);
            carousel.go_to(start);
            assert!(carousel.next());
            assert!(carousel.previous());
            assert_eq!(carousel.current(), start);
        }
    }

    #[test]
    fn edges_are_no_ops() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.previous());
        assert_eq!(carousel.current(), 0);

        carousel.go_to(2);
        assert!(!carousel.next());
        assert_eq!(carousel.current(), 2);
        assert!(carousel.at_end());
        assert!(!carousel.at_start());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.position(), 0);
        assert!(carousel.at_start() && carousel.at_end());
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn repaint_state_tracks_current_slide() {
        let mut carousel = Carousel::new(5);
        carousel.apply(NavCommand::GoTo(3));
        assert_eq!(carousel.offset_percent(), 300);
        assert_eq!(carousel.position(), 4);
        assert!(carousel.is_active(3));
        assert!(!carousel.is_active(2));
    }
}
