//! Application domain model.
//!
//! Pure business logic (no FFI dependencies): hotkey bindings, the
//! character→keycode table, and shared constants. Platform-specific
//! registration lives in `macos`.

pub mod constants;
pub mod hotkey;
pub mod keycodes;

pub use constants::*;
pub use hotkey::{HotkeyBinding, ModifierSet};
