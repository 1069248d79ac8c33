//! Key-down classification for the low-level event tap.
//!
//! Pure decision logic over raw keycode + modifier flags; the platform
//! layer feeds it CGEvent data and acts on the [`Disposition`]. Two
//! remaps live here:
//!
//! - word movement: Control+Arrow becomes Option+Arrow, so Unix-style
//!   word jumps work in Cocoa text views
//! - workspace switch: Cmd+`[` / Cmd+`]` is consumed and replaced with
//!   a synthesized Control+Arrow chord (the space-switching shortcut)
//!
//! The word-movement rewrite must not eat the chords the emitter itself
//! posts, so it defers to the cooldown window.

use std::time::Instant;

use crate::model::constants::{
    CG_FLAG_COMMAND, CG_FLAG_CONTROL, CG_FLAG_OPTION,
};
use crate::model::keycodes::{
    KC_LEFT_ARROW, KC_LEFT_BRACKET, KC_RIGHT_ARROW, KC_RIGHT_BRACKET,
};

use super::cooldown::Cooldown;

/// A key-down as the tap sees it: virtual keycode plus raw CG modifier
/// flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u16,
    pub flags: u64,
}

impl KeyEvent {
    pub fn new(keycode: u16, flags: u64) -> Self {
        Self { keycode, flags }
    }

    fn has(&self, mask: u64) -> bool {
        self.flags & mask != 0
    }
}

/// Which arrow a synthesized chord presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

impl ArrowDirection {
    pub fn keycode(self) -> u16 {
        match self {
            ArrowDirection::Left => KC_LEFT_ARROW,
            ArrowDirection::Right => KC_RIGHT_ARROW,
        }
    }
}

/// What the tap should do with one key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Deliver the event unmodified.
    PassThrough,
    /// Deliver this event instead of the original.
    Replace(KeyEvent),
    /// Consume the original and post a Control+Arrow chord.
    EmitChord(ArrowDirection),
}

/// Classify one key-down. `now` is injected so the cooldown check is
/// testable.
pub fn classify(
    event: KeyEvent,
    word_movement: bool,
    workspace_switch: bool,
    paused: bool,
    cooldown: &Cooldown,
    now: Instant,
) -> Disposition {
    // Hard gate: paused means the tap is transparent.
    if paused {
        return Disposition::PassThrough;
    }

    if workspace_switch && event.has(CG_FLAG_COMMAND) {
        match event.keycode {
            KC_LEFT_BRACKET => return Disposition::EmitChord(ArrowDirection::Left),
            KC_RIGHT_BRACKET => return Disposition::EmitChord(ArrowDirection::Right),
            _ => {}
        }
    }

    if word_movement
        && matches!(event.keycode, KC_LEFT_ARROW | KC_RIGHT_ARROW)
        && event.has(CG_FLAG_CONTROL)
        && !event.has(CG_FLAG_COMMAND)
        && !event.has(CG_FLAG_OPTION)
    {
        // Control+Arrow arriving right after a synthesized chord for the
        // same keycode is our own output echoing back; let it through.
        if cooldown.is_active(now, event.keycode) {
            return Disposition::PassThrough;
        }
        let flags = (event.flags & !CG_FLAG_CONTROL) | CG_FLAG_OPTION;
        return Disposition::Replace(KeyEvent::new(event.keycode, flags));
    }

    Disposition::PassThrough
}
