//! Thin helpers over the objc2 runtime.
//!
//! Dynamic Objective-C objects go through `id` (`*mut AnyObject`) and
//! `msg_send!`; typed wrappers from objc2-app-kit are used where the
//! type is known. These helpers cover the untyped calls.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

/// Objective-C object pointer for dynamic/unknown types.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

pub const YES: Bool = Bool::YES;

use objc2::rc::Retained;
use objc2_app_kit::NSApplication;
use objc2_foundation::NSString;

/// The shared NSApplication instance as a raw pointer.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and leak it as a raw id for `msg_send!` calls.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Look up a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within a fresh autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
