//! Carbon-backed global hotkey registration.
//!
//! Implements the [`HotkeyOs`] trait over `RegisterEventHotKey` and
//! installs the single application-wide handler that turns Carbon
//! hotkey presses into [`AppEvent::HotkeyPressed`] on the event bus.

use tracing::{debug, warn};

use crate::events::{publish, AppEvent};
use crate::input::HotkeyOs;
use crate::model::constants::HOTKEY_SIGNATURE;

use super::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, K_EVENT_CLASS_KEYBOARD,
    K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, TYPE_EVENT_HOTKEY_ID,
};

/// Carbon Event Manager backend for the registrar. Main thread only.
pub struct CarbonHotkeys {
    handler: EventHandlerRef,
}

impl CarbonHotkeys {
    /// Install the application hotkey handler and return the backend.
    ///
    /// # Safety
    /// Must be called from the main thread, once.
    pub unsafe fn install() -> Self {
        let types = [EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_PRESSED,
        }];
        let mut handler: EventHandlerRef = std::ptr::null_mut();
        let status = InstallEventHandler(
            GetApplicationEventTarget(),
            hotkey_event_handler,
            types.len() as u32,
            types.as_ptr(),
            std::ptr::null_mut(),
            &mut handler,
        );
        if status != NO_ERR {
            warn!(status, "InstallEventHandler failed, hotkeys will not fire");
            handler = std::ptr::null_mut();
        }
        Self { handler }
    }
}

impl HotkeyOs for CarbonHotkeys {
    type Handle = EventHotKeyRef;

    fn register(&mut self, keycode: u16, modifier_flags: u32, id: u32) -> Option<EventHotKeyRef> {
        let hk_id = EventHotKeyID {
            signature: HOTKEY_SIGNATURE,
            id,
        };
        let mut out_ref: EventHotKeyRef = std::ptr::null_mut();
        let status = unsafe {
            RegisterEventHotKey(
                keycode as u32,
                modifier_flags,
                hk_id,
                GetApplicationEventTarget(),
                0,
                &mut out_ref,
            )
        };
        if status != NO_ERR || out_ref.is_null() {
            warn!(keycode, modifier_flags, id, status, "RegisterEventHotKey failed");
            return None;
        }
        debug!(keycode, modifier_flags, id, "hotkey registered");
        Some(out_ref)
    }

    fn unregister(&mut self, handle: EventHotKeyRef) {
        if !handle.is_null() {
            let _ = unsafe { UnregisterEventHotKey(handle) };
        }
    }
}

impl Drop for CarbonHotkeys {
    fn drop(&mut self) {
        if !self.handler.is_null() {
            let _ = unsafe { RemoveEventHandler(self.handler) };
            self.handler = std::ptr::null_mut();
        }
    }
}

/// Carbon event handler for hotkey presses.
///
/// Called by the Carbon runtime; extracts the hotkey id and publishes
/// it to the event bus for the main-loop dispatcher. Must not panic.
extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut std::ffi::c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) == K_EVENT_CLASS_KEYBOARD
            && GetEventKind(event) == K_EVENT_HOTKEY_PRESSED
        {
            let mut hot_id = EventHotKeyID {
                signature: 0,
                id: 0,
            };
            let status = GetEventParameter(
                event,
                K_EVENT_PARAM_DIRECT_OBJECT,
                TYPE_EVENT_HOTKEY_ID,
                std::ptr::null_mut(),
                std::mem::size_of::<EventHotKeyID>() as u32,
                std::ptr::null_mut(),
                &mut hot_id as *mut _ as *mut std::ffi::c_void,
            );
            if status == NO_ERR && hot_id.signature == HOTKEY_SIGNATURE {
                publish(AppEvent::HotkeyPressed(hot_id.id));
            }
        }
        NO_ERR
    }
}
