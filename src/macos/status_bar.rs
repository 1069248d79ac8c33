//! Status bar (menu bar) item with dropdown menu.
//!
//! Creates the menu bar presence: Pause/Resume, Open Settings, Reload
//! Config, About, Quit. Menu actions go to a small NSObject subclass
//! that publishes typed events; the same object hosts the dispatch
//! timer selector.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::events::{publish, AppEvent};

use super::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, NSApp};

/// Kept alive for the app lifetime.
static mut STATUS_ITEM: id = std::ptr::null_mut();
static mut PAUSE_ITEM: id = std::ptr::null_mut();

/// Install the status bar item with its menu. Returns the retained
/// target object, which also receives the dispatch timer ticks.
///
/// # Safety
/// Must be called from the main thread, after the app is initialized.
pub unsafe fn install_status_bar() -> id {
    let target = create_target();

    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    STATUS_ITEM = status_item;

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id("SK")];
    }

    let menu = create_status_menu(target);
    let _: () = msg_send![status_item, setMenu: menu];

    target
}

/// Flip the first menu item between Pause and Resume.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn set_pause_title(paused: bool) {
    if PAUSE_ITEM != nil {
        let title = if paused { "Resume" } else { "Pause" };
        let _: () = msg_send![PAUSE_ITEM, setTitle: nsstring_id(title)];
    }
}

/// Register (once) and instantiate the menu/timer target object.
unsafe fn create_target() -> id {
    let class_name = c"StatusBarTarget";
    let target_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        builder.add_method(
            sel!(statusBarTogglePause:),
            status_bar_toggle_pause as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusBarSettings:),
            status_bar_settings as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusBarReload:),
            status_bar_reload as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusBarAbout:),
            status_bar_about as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusBarQuit:),
            status_bar_quit as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(dispatchTick:),
            dispatch_tick as unsafe extern "C-unwind" fn(_, _, _),
        );

        builder.register()
    };

    let target: id = msg_send![target_class, new];
    target
}

/// Create the dropdown menu for the status bar item.
unsafe fn create_status_menu(target: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    let add_item = |title: &str, action: Sel, key: &str| -> id {
        let item: id = msg_send![get_class("NSMenuItem"), alloc];
        let item: id = msg_send![
            item,
            initWithTitle: nsstring_id(title),
            action: action,
            keyEquivalent: nsstring_id(key)
        ];
        let _: () = msg_send![item, setTarget: target];
        let _: () = msg_send![menu, addItem: item];
        item
    };
    let add_separator = || {
        let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
        let _: () = msg_send![menu, addItem: separator];
    };

    PAUSE_ITEM = add_item("Pause", sel!(statusBarTogglePause:), "");
    add_item("Open Settings", sel!(statusBarSettings:), ",");
    add_item("Reload Config", sel!(statusBarReload:), "");
    add_separator();
    add_item("About...", sel!(statusBarAbout:), "");
    add_separator();
    add_item("Quit", sel!(statusBarQuit:), "");

    menu
}

// === Target methods (publish to the event bus; the dispatcher acts) ===

unsafe extern "C-unwind" fn status_bar_toggle_pause(
    _this: *mut AnyObject,
    _sel: Sel,
    _sender: id,
) {
    publish(AppEvent::TogglePause);
}

unsafe extern "C-unwind" fn status_bar_settings(_this: *mut AnyObject, _sel: Sel, _sender: id) {
    publish(AppEvent::OpenSettings);
}

unsafe extern "C-unwind" fn status_bar_reload(_this: *mut AnyObject, _sel: Sel, _sender: id) {
    publish(AppEvent::ConfigChanged);
}

unsafe extern "C-unwind" fn status_bar_about(_this: *mut AnyObject, _sel: Sel, _sender: id) {
    let _: () = msg_send![NSApp(), orderFrontStandardAboutPanel: nil];
}

unsafe extern "C-unwind" fn status_bar_quit(_this: *mut AnyObject, _sel: Sel, _sender: id) {
    publish(AppEvent::Quit);
}

/// Timer selector: drain and dispatch pending bus events.
unsafe extern "C-unwind" fn dispatch_tick(_this: *mut AnyObject, _sel: Sel, _timer: id) {
    super::dispatch_pending();
}
