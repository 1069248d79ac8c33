//! Application events for inter-module communication.
//!
//! These events represent high-level actions that can be published by
//! any module (Carbon hotkey callback, status-bar menu, config store)
//! and handled by the dispatcher on the main run loop. Pure Rust, no
//! FFI dependencies.

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A registered global hotkey fired; payload is the hotkey id
    /// (1000–1009 digits, 2000 settings, 3000 previous app).
    HotkeyPressed(u32),

    /// Toggle the pause gate (status-bar menu action).
    TogglePause,

    /// Open the settings surface.
    OpenSettings,

    /// Quit the application.
    Quit,

    /// The configuration changed; hotkeys and the event tap must be
    /// rebuilt from the new snapshot.
    ConfigChanged,

    /// Hotkeys need to be re-registered (wake from sleep, session
    /// became active, space change).
    ReinstallHotkeys,
}

impl AppEvent {
    /// True if this event should trigger a full hotkey re-registration
    /// and event-tap rebuild.
    pub fn requires_reregistration(&self) -> bool {
        matches!(self, AppEvent::ConfigChanged | AppEvent::ReinstallHotkeys)
    }
}
