/// Minimum horizontal travel, in pixels, for a gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next page.
    Next,
    /// Finger moved right: show the previous page.
    Previous,
}

/// One-shot horizontal swipe detector.
///
/// Only the start and last seen x coordinates matter; velocity and the
/// vertical axis are ignored.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f64,
    current_x: f64,
    active: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
        // A tap with no move must not reuse the previous gesture's end point.
        self.current_x = x;
        self.active = true;
    }

    pub fn touch_move(&mut self, x: f64) {
        if self.active {
            self.current_x = x;
        }
    }

    /// Finish the gesture and classify it.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        if !self.active {
            return None;
        }
        self.active = false;

        let diff = self.start_x - self.current_x;
        if diff > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Next)
        } else if diff < -SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }
}
