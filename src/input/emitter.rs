//! Synthetic Control+Arrow chord planning.
//!
//! A chord is four key events posted in order: Control down, Arrow
//! down with the Control flag, Arrow up with the Control flag, Control
//! up. A short delay between the arrow down and up emulates human
//! timing; without it some consumers drop the chord. The platform
//! layer turns each step into a CGEvent and posts it.

use std::time::Duration;

use crate::model::constants::{CG_FLAG_CONTROL, CHORD_KEY_DELAY};
use crate::model::keycodes::KC_CONTROL;

use super::interceptor::ArrowDirection;

/// One synthetic key event within a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordStep {
    pub keycode: u16,
    pub key_down: bool,
    /// CG modifier flags to stamp on the event.
    pub flags: u64,
    /// Sleep this long after posting, before the next step.
    pub delay_after: Duration,
}

/// The four steps of a Control+Arrow chord, in posting order.
pub fn chord_plan(direction: ArrowDirection) -> [ChordStep; 4] {
    let arrow = direction.keycode();
    [
        ChordStep {
            keycode: KC_CONTROL,
            key_down: true,
            flags: CG_FLAG_CONTROL,
            delay_after: Duration::ZERO,
        },
        ChordStep {
            keycode: arrow,
            key_down: true,
            flags: CG_FLAG_CONTROL,
            delay_after: CHORD_KEY_DELAY,
        },
        ChordStep {
            keycode: arrow,
            key_down: false,
            flags: CG_FLAG_CONTROL,
            delay_after: Duration::ZERO,
        },
        ChordStep {
            keycode: KC_CONTROL,
            key_down: false,
            flags: 0,
            delay_after: Duration::ZERO,
        },
    ]
}
