//! SwitchKey: modifier+digit app switching and keyboard remaps for macOS.
//!
//! A menu-bar-only utility. Global digit hotkeys activate configured
//! applications; optional low-level remaps turn Control+Arrow into
//! Option+Arrow word movement and Cmd+brackets into workspace-switch
//! chords.
//!
//! The crate splits into a platform-independent core and a macOS layer:
//!
//! - [`model`]: hotkey bindings, keycode tables, shared constants
//! - [`config`]: the settings snapshot and its flat config file
//! - [`events`]: the mpsc event bus connecting callbacks to the dispatcher
//! - [`input`]: registration, routing, interception, and chord planning
//! - [`macos`]: Carbon/CGEventTap/NSWorkspace wiring (macOS only)

pub mod config;
pub mod events;
pub mod input;
pub mod model;

#[cfg(target_os = "macos")]
pub mod macos;
