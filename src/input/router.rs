//! Routes hotkey-pressed events to their actions.
//!
//! The router is pure decision logic: given a hotkey id and the current
//! bindings, it decides what should happen and asks the injected
//! [`Capabilities`] to do it. Platform work (activating apps, opening
//! the settings surface) lives behind the trait.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::model::constants::{digit_for_hotkey_id, HKID_PREVIOUS, HKID_SETTINGS};

/// Actions the router can trigger. Implemented by the platform layer;
/// tests substitute a recording mock.
pub trait Capabilities {
    fn open_settings(&mut self);

    /// Activate the named application; true on success.
    fn switch_to_application(&mut self, name: &str) -> bool;

    /// Activate the previously active application; true on success.
    fn switch_to_previous_application(&mut self) -> bool;
}

/// Hotkey dispatch with a global pause switch.
pub struct HotkeyRouter {
    paused: bool,
}

impl HotkeyRouter {
    pub fn new() -> Self {
        Self { paused: false }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Handle one hotkey press. Returns true if the event was handled,
    /// which includes the paused no-op swallow.
    ///
    /// While paused every id is swallowed, including the settings
    /// hotkey; only the menu reaches the settings surface then.
    pub fn dispatch<C: Capabilities>(
        &self,
        id: u32,
        bindings: &BTreeMap<char, String>,
        caps: &mut C,
    ) -> bool {
        if self.paused {
            debug!(id, "paused, swallowing hotkey");
            return true;
        }

        if let Some(digit) = digit_for_hotkey_id(id) {
            return match bindings.get(&digit) {
                Some(app) => {
                    let ok = caps.switch_to_application(app);
                    if !ok {
                        warn!(%digit, app, "could not activate bound application");
                    }
                    ok
                }
                None => {
                    debug!(%digit, "digit has no binding");
                    false
                }
            };
        }

        match id {
            HKID_SETTINGS => {
                caps.open_settings();
                true
            }
            HKID_PREVIOUS => caps.switch_to_previous_application(),
            _ => {
                warn!(id, "unknown hotkey id");
                false
            }
        }
    }
}

impl Default for HotkeyRouter {
    fn default() -> Self {
        Self::new()
    }
}
