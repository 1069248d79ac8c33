//! Feedback-suppression window for synthetic chords.
//!
//! The emitter posts Control+Arrow chords back into the same event
//! stream the interceptor is watching, and the word-movement remap
//! would otherwise rewrite them. Starting a cooldown just before a
//! chord is posted makes the interceptor pass that arrow's
//! Control+key-down through untouched for a short window; the other
//! arrow stays unaffected.

use std::time::{Duration, Instant};

/// A restartable suppression window, armed for one keycode at a time.
/// Times are injected so the logic is testable without sleeping.
#[derive(Debug, Clone)]
pub struct Cooldown {
    window: Duration,
    armed: Option<(Instant, u16)>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: None,
        }
    }

    /// (Re)arm the window at `now` for `keycode`. Re-arming extends the
    /// window and replaces the previous keycode.
    pub fn start(&mut self, now: Instant, keycode: u16) {
        self.armed = Some((now, keycode));
    }

    /// True while `now` is within the window of the latest start and
    /// `keycode` matches the armed one.
    pub fn is_active(&self, now: Instant, keycode: u16) -> bool {
        match self.armed {
            Some((start, armed_keycode)) => {
                if keycode != armed_keycode {
                    return false;
                }
                // checked_duration_since: a start recorded "after" now (clock
                // oddities, test fixtures) counts as active rather than panicking.
                match now.checked_duration_since(start) {
                    Some(elapsed) => elapsed < self.window,
                    None => true,
                }
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: u16 = 123;
    const OTHER_KEY: u16 = 124;

    #[test]
    fn inactive_until_started() {
        let cd = Cooldown::new(Duration::from_millis(100));
        assert!(!cd.is_active(Instant::now(), KEY));
    }

    #[test]
    fn active_within_window_then_expires() {
        let mut cd = Cooldown::new(Duration::from_millis(100));
        let t0 = Instant::now();
        cd.start(t0, KEY);
        assert!(cd.is_active(t0, KEY));
        assert!(cd.is_active(t0 + Duration::from_millis(99), KEY));
        assert!(!cd.is_active(t0 + Duration::from_millis(100), KEY));
        assert!(!cd.is_active(t0 + Duration::from_millis(250), KEY));
    }

    #[test]
    fn only_the_armed_keycode_is_suppressed() {
        let mut cd = Cooldown::new(Duration::from_millis(100));
        let t0 = Instant::now();
        cd.start(t0, KEY);
        assert!(cd.is_active(t0 + Duration::from_millis(10), KEY));
        assert!(!cd.is_active(t0 + Duration::from_millis(10), OTHER_KEY));
    }

    #[test]
    fn restart_extends_the_window_and_rearms() {
        let mut cd = Cooldown::new(Duration::from_millis(100));
        let t0 = Instant::now();
        cd.start(t0, KEY);
        cd.start(t0 + Duration::from_millis(80), OTHER_KEY);
        assert!(cd.is_active(t0 + Duration::from_millis(150), OTHER_KEY));
        assert!(!cd.is_active(t0 + Duration::from_millis(150), KEY));
        assert!(!cd.is_active(t0 + Duration::from_millis(181), OTHER_KEY));
    }
}
