//! FFI bindings for CoreGraphics event taps and CoreFoundation utilities.
//!
//! The `core-graphics` crate covers event creation and posting, but its
//! tap wrapper does not expose the raw callback form needed to modify
//! an event in place, so `CGEventTapCreate` is declared here directly
//! with the crate's enums for the parameter types.

use std::ffi::c_void;

use core_foundation::mach_port::CFMachPortRef;
use core_graphics::event::{
    CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventTapProxy, CGEventType,
};

/// Bit mask over `CGEventType` values.
pub type CGEventMask = u64;

/// Raw tap callback: return the event pointer to deliver it, null to
/// consume it.
pub type CGEventTapCallBack = unsafe extern "C" fn(
    proxy: CGEventTapProxy,
    event_type: CGEventType,
    event: *mut c_void,
    user_info: *mut c_void,
) -> *mut c_void;

// Raw CGEventType values for taps that must match without PartialEq.
pub const CG_EVENT_KEY_DOWN: u32 = 10;
pub const CG_EVENT_TAP_DISABLED_BY_TIMEOUT: u32 = 0xFFFF_FFFE;
pub const CG_EVENT_TAP_DISABLED_BY_USER_INPUT: u32 = 0xFFFF_FFFF;

/// CGEventField value for the virtual keycode of a keyboard event.
pub const CG_FIELD_KEYBOARD_KEYCODE: u32 = 9;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGEventTapCreate(
        tap: CGEventTapLocation,
        place: CGEventTapPlacement,
        options: CGEventTapOptions,
        events_of_interest: CGEventMask,
        callback: CGEventTapCallBack,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    pub fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);

    pub fn CGEventGetFlags(event: *mut c_void) -> u64;
    pub fn CGEventSetFlags(event: *mut c_void, flags: u64);
    pub fn CGEventGetIntegerValueField(event: *mut c_void, field: u32) -> i64;
}
