//! FFI bindings for macOS frameworks.
//!
//! This module encapsulates all `extern "C"` declarations and helpers
//! needed to interact with Carbon, CoreGraphics, CoreFoundation, and
//! the Objective-C runtime.

pub mod accessibility;
pub mod bridge;
pub mod carbon;
pub mod coregraphics;

pub use accessibility::*;
pub use carbon::*;
pub use coregraphics::*;
