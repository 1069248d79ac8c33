//! System observers that keep Carbon hotkeys healthy.
//!
//! Carbon registrations can get dropped across sleep/wake, session
//! switches, and Space changes; these observers publish a re-register
//! request when any of those fire. A separate observer unregisters
//! everything cleanly at termination.

use block2::RcBlock;

use crate::events::{publish, AppEvent};

use super::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, AnyObject};

/// Re-register hotkeys after wake, unlock, and Space changes.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn install_wakeup_space_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    let add_obs = |name: &str| {
        let name = nsstring_id(name);
        let block = RcBlock::new(|_note: *mut AnyObject| {
            publish(AppEvent::ReinstallHotkeys);
        });
        let _: id =
            msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    add_obs("NSWorkspaceDidWakeNotification");
    add_obs("NSWorkspaceSessionDidBecomeActiveNotification");
    add_obs("NSWorkspaceActiveSpaceDidChangeNotification");
}

/// Unregister all hotkeys when the app terminates.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn install_termination_observer() {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let name = nsstring_id("NSApplicationWillTerminateNotification");

    let block = RcBlock::new(|_note: *mut AnyObject| {
        super::with_app(|app| app.registrar.unregister_all());
    });
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}
