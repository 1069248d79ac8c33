//! Hotkey bindings and modifier sets (pure Rust, no FFI).
//!
//! A binding serializes to a `+`-joined token string with modifiers in a
//! fixed order followed by the key character, e.g. `cmd+shift+,`. A
//! binding without a key is "unset" and is never registered with the OS.

use super::constants::*;

/// Modifier token names, in serialization order.
const TOKEN_CMD: &str = "cmd";
const TOKEN_OPT: &str = "opt";
const TOKEN_CTRL: &str = "ctrl";
const TOKEN_SHIFT: &str = "shift";

/// Named token for the space key; a literal space cannot survive the
/// token format (tokens are trimmed, and so are config values).
const TOKEN_SPACE: &str = "space";

/// The set of modifier keys attached to a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierSet {
    pub command: bool,
    pub option: bool,
    pub control: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub const EMPTY: ModifierSet = ModifierSet {
        command: false,
        option: false,
        control: false,
        shift: false,
    };

    pub const COMMAND: ModifierSet = ModifierSet {
        command: true,
        option: false,
        control: false,
        shift: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.command || self.option || self.control || self.shift)
    }

    /// Try to add a modifier by its token name. Returns false for
    /// anything that is not a modifier token.
    pub fn insert_token(&mut self, token: &str) -> bool {
        match token {
            TOKEN_CMD => self.command = true,
            TOKEN_OPT => self.option = true,
            TOKEN_CTRL => self.control = true,
            TOKEN_SHIFT => self.shift = true,
            _ => return false,
        }
        true
    }

    pub fn is_modifier_token(token: &str) -> bool {
        matches!(token, TOKEN_CMD | TOKEN_OPT | TOKEN_CTRL | TOKEN_SHIFT)
    }

    /// Tokens in fixed order (cmd, opt, ctrl, shift).
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.command {
            out.push(TOKEN_CMD);
        }
        if self.option {
            out.push(TOKEN_OPT);
        }
        if self.control {
            out.push(TOKEN_CTRL);
        }
        if self.shift {
            out.push(TOKEN_SHIFT);
        }
        out
    }

    /// Parse a `+`-joined modifier list; unknown tokens are ignored.
    pub fn parse(s: &str) -> ModifierSet {
        let mut set = ModifierSet::default();
        for token in s.split('+') {
            set.insert_token(token.trim());
        }
        set
    }

    pub fn serialize(&self) -> String {
        self.tokens().join("+")
    }

    /// The set to actually register with the OS: an empty set falls back
    /// to Command so a bare, unmodified key is never claimed globally.
    pub fn or_primary(&self) -> ModifierSet {
        if self.is_empty() {
            ModifierSet::COMMAND
        } else {
            *self
        }
    }

    /// Carbon `RegisterEventHotKey` modifier mask.
    pub fn carbon_flags(&self) -> u32 {
        let mut flags = 0;
        if self.command {
            flags |= CARBON_CMD_KEY;
        }
        if self.option {
            flags |= CARBON_OPTION_KEY;
        }
        if self.control {
            flags |= CARBON_CONTROL_KEY;
        }
        if self.shift {
            flags |= CARBON_SHIFT_KEY;
        }
        flags
    }
}

/// A key character plus modifier set; the unit of hotkey configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HotkeyBinding {
    pub key: Option<char>,
    pub modifiers: ModifierSet,
}

impl HotkeyBinding {
    pub fn new(key: char, modifiers: ModifierSet) -> Self {
        Self {
            key: Some(key),
            modifiers,
        }
    }

    pub const UNSET: HotkeyBinding = HotkeyBinding {
        key: None,
        modifiers: ModifierSet::EMPTY,
    };

    /// An unset binding has no key and must not be registered.
    pub fn is_set(&self) -> bool {
        self.key.is_some()
    }

    /// `+`-joined token string: modifiers in fixed order, then the key
    /// (the space key as its named token).
    pub fn serialize(&self) -> String {
        let mut tokens = self.modifiers.tokens();
        let key_str;
        if let Some(k) = self.key {
            key_str = if k == ' ' {
                TOKEN_SPACE.to_string()
            } else {
                k.to_string()
            };
            tokens.push(&key_str);
        }
        tokens.join("+")
    }

    /// Split on `+`; every token naming a modifier joins the set, and the
    /// final non-modifier token (if any) is taken as the key character.
    pub fn deserialize(s: &str) -> HotkeyBinding {
        let mut binding = HotkeyBinding::default();
        for token in s.split('+') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if binding.modifiers.insert_token(token) {
                continue;
            }
            if token == TOKEN_SPACE {
                binding.key = Some(' ');
                continue;
            }
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                binding.key = Some(c);
            }
        }
        binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_tokens_keep_fixed_order() {
        let set = ModifierSet {
            command: true,
            option: false,
            control: true,
            shift: true,
        };
        assert_eq!(set.serialize(), "cmd+ctrl+shift");
    }

    #[test]
    fn empty_set_falls_back_to_command() {
        assert_eq!(ModifierSet::EMPTY.or_primary(), ModifierSet::COMMAND);
        let opt = ModifierSet {
            option: true,
            ..ModifierSet::EMPTY
        };
        assert_eq!(opt.or_primary(), opt);
    }

    #[test]
    fn carbon_flags_cover_all_modifiers() {
        let all = ModifierSet {
            command: true,
            option: true,
            control: true,
            shift: true,
        };
        assert_eq!(
            all.carbon_flags(),
            CARBON_CMD_KEY | CARBON_OPTION_KEY | CARBON_CONTROL_KEY | CARBON_SHIFT_KEY
        );
        assert_eq!(ModifierSet::EMPTY.carbon_flags(), 0);
    }

    #[test]
    fn binding_serializes_modifiers_then_key() {
        let b = HotkeyBinding::new(
            ',',
            ModifierSet {
                command: true,
                shift: true,
                ..ModifierSet::EMPTY
            },
        );
        assert_eq!(b.serialize(), "cmd+shift+,");
    }

    #[test]
    fn unset_binding_serializes_to_modifiers_only() {
        let b = HotkeyBinding {
            key: None,
            modifiers: ModifierSet::COMMAND,
        };
        assert_eq!(b.serialize(), "cmd");
        assert!(!b.is_set());
    }

    #[test]
    fn deserialize_final_modifier_token_is_not_a_key() {
        let b = HotkeyBinding::deserialize("cmd+shift");
        assert_eq!(b.key, None);
        assert!(b.modifiers.command);
        assert!(b.modifiers.shift);
    }

    #[test]
    fn deserialize_ignores_multi_char_junk_tokens() {
        let b = HotkeyBinding::deserialize("cmd+escape");
        assert_eq!(b.key, None);
        assert!(b.modifiers.command);
    }

    #[test]
    fn space_key_uses_a_named_token() {
        let b = HotkeyBinding::new(' ', ModifierSet::COMMAND);
        assert_eq!(b.serialize(), "cmd+space");
        assert_eq!(HotkeyBinding::deserialize("cmd+space"), b);
        assert_eq!(HotkeyBinding::deserialize(&b.serialize()), b);
    }
}
