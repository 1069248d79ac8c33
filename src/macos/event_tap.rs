//! Session event tap for the key remaps.
//!
//! A CGEventTap on key-downs, attached to the main run loop. Each event
//! is classified by the platform-independent interceptor; the callback
//! then passes it through, rewrites its modifier flags in place, or
//! consumes it and posts a synthetic chord.
//!
//! The tap only exists while at least one remap toggle is on; the
//! dispatcher installs and drops it on config changes.

use std::ffi::c_void;
use std::time::Instant;

use core_foundation::base::TCFType;
use core_foundation::mach_port::CFMachPort;
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop, CFRunLoopSource};
use core_graphics::event::{
    CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventTapProxy, CGEventType,
};
use tracing::{debug, warn};

use crate::input::{classify, Disposition, KeyEvent};

use super::chord;
use super::ffi::{
    CGEventGetFlags, CGEventGetIntegerValueField, CGEventMask, CGEventSetFlags, CGEventTapCreate,
    CGEventTapEnable, CG_EVENT_KEY_DOWN, CG_EVENT_TAP_DISABLED_BY_TIMEOUT,
    CG_EVENT_TAP_DISABLED_BY_USER_INPUT, CG_FIELD_KEYBOARD_KEYCODE,
};

/// An installed, enabled key-down tap. Dropping it tears the tap down
/// synchronously.
pub struct EventTap {
    port: CFMachPort,
    source: CFRunLoopSource,
}

impl EventTap {
    /// Create and enable a session tap on the current run loop.
    ///
    /// Returns `None` when the OS refuses the tap, which almost always
    /// means missing Accessibility access. Hotkeys keep working.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn install() -> Option<Self> {
        let mask: CGEventMask = 1 << CG_EVENT_KEY_DOWN as u64;
        let port_ref = CGEventTapCreate(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            mask,
            tap_callback,
            std::ptr::null_mut(),
        );
        if port_ref.is_null() {
            warn!("CGEventTapCreate failed, key remaps inactive (accessibility access missing?)");
            return None;
        }
        let port = CFMachPort::wrap_under_create_rule(port_ref);

        let source = match port.create_runloop_source(0) {
            Ok(source) => source,
            Err(_) => {
                warn!("could not create run loop source for event tap");
                return None;
            }
        };
        CFRunLoop::get_current().add_source(&source, kCFRunLoopCommonModes);
        CGEventTapEnable(port.as_concrete_TypeRef(), true);

        debug!("event tap installed");
        Some(Self { port, source })
    }

    /// Re-enable the tap after the OS disabled it.
    pub fn enable(&self) {
        unsafe { CGEventTapEnable(self.port.as_concrete_TypeRef(), true) };
    }
}

impl Drop for EventTap {
    fn drop(&mut self) {
        unsafe {
            CGEventTapEnable(self.port.as_concrete_TypeRef(), false);
            CFRunLoop::get_current().remove_source(&self.source, kCFRunLoopCommonModes);
        }
        debug!("event tap removed");
    }
}

/// The raw tap callback. Runs on the main run loop; must not panic.
unsafe extern "C" fn tap_callback(
    _proxy: CGEventTapProxy,
    event_type: CGEventType,
    event: *mut c_void,
    _user_info: *mut c_void,
) -> *mut c_void {
    let raw_type = event_type as u32;

    // The OS disables taps it considers stalled; bring ours back.
    if raw_type == CG_EVENT_TAP_DISABLED_BY_TIMEOUT
        || raw_type == CG_EVENT_TAP_DISABLED_BY_USER_INPUT
    {
        warn!("event tap disabled by the OS, re-enabling");
        super::with_app(|app| {
            if let Some(tap) = &app.tap {
                tap.enable();
            }
        });
        return event;
    }
    if raw_type != CG_EVENT_KEY_DOWN {
        return event;
    }

    let keycode = CGEventGetIntegerValueField(event, CG_FIELD_KEYBOARD_KEYCODE) as u16;
    let flags = CGEventGetFlags(event);
    let now = Instant::now();

    let disposition = super::with_app(|app| {
        let settings = app.store.settings();
        let disposition = classify(
            KeyEvent::new(keycode, flags),
            settings.word_movement,
            settings.workspace_switch,
            app.router.is_paused(),
            &app.cooldown,
            now,
        );
        if let Disposition::EmitChord(direction) = disposition {
            // Recorded before posting so the chord's own Control+Arrow
            // key-down is not rewritten when it echoes back.
            app.cooldown.start(now, direction.keycode());
        }
        disposition
    })
    .unwrap_or(Disposition::PassThrough);

    match disposition {
        Disposition::PassThrough => event,
        Disposition::Replace(replacement) => {
            CGEventSetFlags(event, replacement.flags);
            event
        }
        Disposition::EmitChord(direction) => {
            chord::post_chord(direction);
            std::ptr::null_mut()
        }
    }
}
