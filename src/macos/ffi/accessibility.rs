//! FFI bindings for ApplicationServices (Accessibility).
//!
//! The event tap only receives keyboard events once the user grants
//! Accessibility access; this module checks and prompts for it.

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};

// === FFI Declarations ===

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;

    pub static kAXTrustedCheckOptionPrompt: CFStringRef;
}

/// Check accessibility access, prompting the user if not yet granted.
///
/// Returns whether the process is currently trusted. Remaps stay dark
/// until access is granted; hotkeys work regardless.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn ensure_accessibility_prompt() -> bool {
    let prompt_key = CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt);
    let options = CFDictionary::from_CFType_pairs(&[(prompt_key, CFBoolean::true_value())]);
    AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef())
}
