//! Platform-independent input logic.
//!
//! Everything here is pure Rust: registration planning, hotkey
//! dispatch, key-down classification, and chord planning. The macOS
//! layer supplies the OS traits and acts on the returned values.
//!
//! - [`registrar`]: rebuilds the global hotkey set from settings
//! - [`router`]: routes hotkey ids to capabilities, with the pause gate
//! - [`interceptor`]: classifies tapped key-downs (remap decisions)
//! - [`emitter`]: plans synthetic Control+Arrow chords
//! - [`cooldown`]: the feedback-suppression window

pub mod cooldown;
pub mod emitter;
pub mod interceptor;
pub mod registrar;
pub mod router;

pub use cooldown::Cooldown;
pub use emitter::{chord_plan, ChordStep};
pub use interceptor::{classify, ArrowDirection, Disposition, KeyEvent};
pub use registrar::{HotkeyOs, HotkeyRegistrar};
pub use router::{Capabilities, HotkeyRouter};
