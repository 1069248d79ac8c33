//! Posts synthetic Control+Arrow chords into the HID event stream.

use std::thread;

use core_graphics::event::{CGEvent, CGEventFlags, CGEventTapLocation};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use tracing::{debug, warn};

use crate::input::{chord_plan, ArrowDirection};

/// Post the four events of a chord, best effort. A failed event source
/// or event construction aborts the remainder; a half-posted chord is
/// harmless (the modifier-up never outlives its down for long).
pub fn post_chord(direction: ArrowDirection) {
    let Ok(source) = CGEventSource::new(CGEventSourceStateID::HIDSystemState) else {
        warn!("could not create event source, dropping chord");
        return;
    };

    for step in chord_plan(direction) {
        let Ok(event) = CGEvent::new_keyboard_event(source.clone(), step.keycode, step.key_down)
        else {
            warn!(keycode = step.keycode, "could not create synthetic key event, aborting chord");
            return;
        };
        event.set_flags(CGEventFlags::from_bits_truncate(step.flags));
        event.post(CGEventTapLocation::HID);
        if !step.delay_after.is_zero() {
            thread::sleep(step.delay_after);
        }
    }
    debug!(?direction, "chord posted");
}
