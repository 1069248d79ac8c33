//! Hotkey identifiers, modifier bit masks, and timing constants.

use std::time::Duration;

// === Hotkey identity ===

/// Four-byte signature tagging every hotkey this app registers: 'swky'.
pub const HOTKEY_SIGNATURE: u32 = 0x7377_6B79;

/// Base id for the ten digit hotkeys: digit `d` registers as `1000 + d`.
pub const HKID_DIGIT_BASE: u32 = 1000;

/// Id for the "open settings" hotkey.
pub const HKID_SETTINGS: u32 = 2000;

/// Id for the "switch to previous app" hotkey.
pub const HKID_PREVIOUS: u32 = 3000;

/// Hotkey id for a digit value (0..=9).
pub fn hotkey_id_for_digit(digit: u32) -> u32 {
    HKID_DIGIT_BASE + digit
}

/// The digit character a hotkey id encodes, if it is a digit id.
pub fn digit_for_hotkey_id(id: u32) -> Option<char> {
    if (HKID_DIGIT_BASE..HKID_DIGIT_BASE + 10).contains(&id) {
        char::from_digit(id - HKID_DIGIT_BASE, 10)
    } else {
        None
    }
}

// === Carbon modifier masks (RegisterEventHotKey) ===

pub const CARBON_CMD_KEY: u32 = 1 << 8;
pub const CARBON_SHIFT_KEY: u32 = 1 << 9;
pub const CARBON_OPTION_KEY: u32 = 1 << 11;
pub const CARBON_CONTROL_KEY: u32 = 1 << 12;

// === CGEvent modifier flag masks ===

pub const CG_FLAG_SHIFT: u64 = 0x0002_0000;
pub const CG_FLAG_CONTROL: u64 = 0x0004_0000;
pub const CG_FLAG_OPTION: u64 = 0x0008_0000;
pub const CG_FLAG_COMMAND: u64 = 0x0010_0000;

// === Timing ===

/// How long the interceptor ignores Control+Arrow key-downs after the
/// emitter posts a workspace-switch chord, so the word-movement remap
/// never eats its own synthetic events.
pub const CHORD_COOLDOWN_WINDOW: Duration = Duration::from_millis(100);

/// Pause between the key-down and key-up halves of a synthetic chord,
/// emulating human timing.
pub const CHORD_KEY_DELAY: Duration = Duration::from_millis(10);

// === Config file keys ===

pub const CFG_SWITCH_MODIFIERS: &str = "switch.modifiers";
pub const CFG_SWITCH_KEY: &str = "switch.key";
pub const CFG_SETTINGS_HOTKEY: &str = "settings.hotkey";
pub const CFG_PREVIOUS_HOTKEY: &str = "previous.hotkey";
pub const CFG_WORD_MOVEMENT: &str = "remap.word_movement";
pub const CFG_WORKSPACE_SWITCH: &str = "remap.workspace_switch";

/// Prefix for per-digit application bindings: `keybinding.<digit>=<app>`.
pub const CFG_KEYBINDING_PREFIX: &str = "keybinding.";
