//! Application switching via NSWorkspace.
//!
//! Provides the capability backend for the hotkey router: activate an
//! app by name (case-insensitive, launching it if needed), switch back
//! to the previously active app, and open the settings file. Previous-
//! app tracking rides on the workspace's activation notifications.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use block2::RcBlock;
use objc2_foundation::NSString;
use tracing::{debug, warn};

use crate::input::Capabilities;

use super::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, AnyObject};

thread_local! {
    /// (current, previous) frontmost application names, by activation order.
    static ACTIVE_APPS: RefCell<(Option<String>, Option<String>)> =
        const { RefCell::new((None, None)) };
}

/// Track frontmost-app changes so "switch to previous" has a target.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn install_activation_observer() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];
    let name = nsstring_id("NSWorkspaceDidActivateApplicationNotification");

    let block = RcBlock::new(|note: *mut AnyObject| {
        if let Some(name) = unsafe { activated_app_name(note) } {
            note_activation(name);
        }
    });
    let _: id =
        msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Pull the localized app name out of a didActivateApplication note.
unsafe fn activated_app_name(note: id) -> Option<String> {
    if note == nil {
        return None;
    }
    let user_info: id = msg_send![note, userInfo];
    if user_info == nil {
        return None;
    }
    let key = nsstring_id("NSWorkspaceApplicationKey");
    let app: id = msg_send![user_info, objectForKey: key];
    if app == nil {
        return None;
    }
    let app_name: id = msg_send![app, localizedName];
    if app_name == nil {
        return None;
    }
    Some((*(app_name as *mut NSString)).to_string())
}

fn note_activation(name: String) {
    ACTIVE_APPS.with(|cell| {
        let mut apps = cell.borrow_mut();
        if apps.0.as_deref() != Some(name.as_str()) {
            apps.1 = apps.0.take();
            apps.0 = Some(name);
        }
    });
}

/// NSWorkspace-backed implementation of the router capabilities.
pub struct WorkspaceCapabilities {
    config_path: PathBuf,
}

impl WorkspaceCapabilities {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl Capabilities for WorkspaceCapabilities {
    fn open_settings(&mut self) {
        // The settings surface is the config file itself; make sure it
        // exists so the editor has something to open.
        if !self.config_path.exists() {
            if let Some(parent) = self.config_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(&self.config_path, "");
        }
        unsafe {
            let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
            let path = nsstring_id(&self.config_path.to_string_lossy());
            let opened: bool = msg_send![ws, openFile: path];
            if !opened {
                warn!(path = %self.config_path.display(), "could not open settings file");
            }
        }
    }

    fn switch_to_application(&mut self, name: &str) -> bool {
        unsafe { activate_application(name) }
    }

    fn switch_to_previous_application(&mut self) -> bool {
        let previous = ACTIVE_APPS.with(|cell| cell.borrow().1.clone());
        match previous {
            Some(name) => unsafe { activate_application(&name) },
            None => {
                debug!("no previous application recorded yet");
                false
            }
        }
    }
}

/// Activate a running app by case-insensitive name match; fall back to
/// launching it from the standard install directories.
unsafe fn activate_application(name: &str) -> bool {
    let wanted = name.to_lowercase();

    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let apps: id = msg_send![ws, runningApplications];
    let count: usize = msg_send![apps, count];
    for i in 0..count {
        let app: id = msg_send![apps, objectAtIndex: i];
        let app_name: id = msg_send![app, localizedName];
        if app_name == nil {
            continue;
        }
        let app_name = (*(app_name as *mut NSString)).to_string();
        if app_name.to_lowercase() == wanted {
            // NSApplicationActivateIgnoringOtherApps
            let ok: bool = msg_send![app, activateWithOptions: 1u64 << 1];
            debug!(name, ok, "activated running application");
            return ok;
        }
    }

    launch_application(name)
}

unsafe fn launch_application(name: &str) -> bool {
    let Some(bundle) = find_application_bundle(name) else {
        warn!(name, "application not running and no bundle found");
        return false;
    };
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let path = nsstring_id(&bundle.to_string_lossy());
    let launched: bool = msg_send![ws, openFile: path];
    debug!(name, bundle = %bundle.display(), launched, "launched application");
    launched
}

/// Search the standard install directories for `<name>.app`,
/// case-insensitively.
fn find_application_bundle(name: &str) -> Option<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/Applications/Utilities"),
        PathBuf::from("/System/Applications"),
    ];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Applications"));
    }
    find_bundle_in(&roots, name)
}

fn find_bundle_in(roots: &[PathBuf], name: &str) -> Option<PathBuf> {
    let wanted = format!("{}.app", name).to_lowercase();
    for root in roots {
        let Ok(entries) = fs::read_dir(root) else {
            continue;
        };
        for entry in entries.flatten() {
            if entry.file_name().to_string_lossy().to_lowercase() == wanted {
                return Some(entry.path());
            }
        }
    }
    None
}
