//! Global hotkey registration, independent of the OS API behind it.
//!
//! The registrar owns the set of currently registered hotkeys and
//! rebuilds it wholesale from a [`Settings`] snapshot: unregister
//! everything, then register the ten digit keys, the settings hotkey,
//! and the previous-app hotkey as configured. Re-running it against the
//! same snapshot is idempotent.
//!
//! The actual OS calls sit behind the [`HotkeyOs`] trait so the rebuild
//! logic is testable off-platform.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::model::constants::{hotkey_id_for_digit, HKID_PREVIOUS, HKID_SETTINGS};
use crate::model::keycodes::{keycode_for_char, keycode_for_digit};
use crate::model::HotkeyBinding;

/// The OS surface the registrar drives. One registration yields an
/// opaque handle that is later passed back to unregister.
pub trait HotkeyOs {
    type Handle;

    /// Register a global hotkey; `None` means the OS refused it (for
    /// example, the combination is already claimed system-wide).
    fn register(&mut self, keycode: u16, modifier_flags: u32, id: u32) -> Option<Self::Handle>;

    fn unregister(&mut self, handle: Self::Handle);
}

/// Owns all live hotkey registrations.
pub struct HotkeyRegistrar<O: HotkeyOs> {
    os: O,
    handles: Vec<O::Handle>,
}

impl<O: HotkeyOs> HotkeyRegistrar<O> {
    pub fn new(os: O) -> Self {
        Self {
            os,
            handles: Vec::new(),
        }
    }

    /// Tear down every registration and rebuild from the snapshot.
    pub fn update_global_keybindings(&mut self, settings: &Settings) {
        self.unregister_all();

        // Digit hotkeys are always registered, bound or not; pressing an
        // unbound digit is a no-op at dispatch time.
        let digit_flags = settings.switch_modifiers.or_primary().carbon_flags();
        for digit in 0..10u8 {
            let keycode = keycode_for_digit(digit);
            self.register(keycode, digit_flags, hotkey_id_for_digit(digit as u32));
        }

        self.register_binding(&settings.settings_hotkey, HKID_SETTINGS, "settings");
        self.register_binding(&settings.previous_hotkey, HKID_PREVIOUS, "previous-app");

        debug!(active = self.handles.len(), "hotkey registrations rebuilt");
    }

    fn register_binding(&mut self, binding: &HotkeyBinding, id: u32, what: &str) {
        let Some(key) = binding.key else {
            debug!(what, "hotkey unset, skipping registration");
            return;
        };
        let Some(keycode) = keycode_for_char(key) else {
            warn!(what, %key, "no keycode for key, skipping registration");
            return;
        };
        let flags = binding.modifiers.or_primary().carbon_flags();
        self.register(keycode, flags, id);
    }

    fn register(&mut self, keycode: u16, modifier_flags: u32, id: u32) {
        match self.os.register(keycode, modifier_flags, id) {
            Some(handle) => self.handles.push(handle),
            // One refused combination must not take down the rest.
            None => warn!(keycode, modifier_flags, id, "hotkey registration refused"),
        }
    }

    /// Unregister everything, e.g. before rebuild or on shutdown.
    pub fn unregister_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.os.unregister(handle);
        }
    }

    /// Number of currently live registrations.
    pub fn active_count(&self) -> usize {
        self.handles.len()
    }
}

impl<O: HotkeyOs> Drop for HotkeyRegistrar<O> {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
