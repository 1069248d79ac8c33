//! Fixed character → ANSI virtual keycode table.
//!
//! Covers lowercase letters, digits, and the punctuation reachable
//! without modifiers on a US layout. Characters outside this table
//! cannot be registered as hotkeys; callers skip them with a warning.

// Keycodes shared with the event tap.
pub const KC_LEFT_ARROW: u16 = 123;
pub const KC_RIGHT_ARROW: u16 = 124;
pub const KC_LEFT_BRACKET: u16 = 33;
pub const KC_RIGHT_BRACKET: u16 = 30;
pub const KC_CONTROL: u16 = 59;

/// Map a printable character to its ANSI virtual keycode, or None if
/// the character is outside the supported table.
pub fn keycode_for_char(c: char) -> Option<u16> {
    let code = match c {
        'a' => 0,
        's' => 1,
        'd' => 2,
        'f' => 3,
        'h' => 4,
        'g' => 5,
        'z' => 6,
        'x' => 7,
        'c' => 8,
        'v' => 9,
        'b' => 11,
        'q' => 12,
        'w' => 13,
        'e' => 14,
        'r' => 15,
        'y' => 16,
        't' => 17,
        '1' => 18,
        '2' => 19,
        '3' => 20,
        '4' => 21,
        '6' => 22,
        '5' => 23,
        '=' => 24,
        '9' => 25,
        '7' => 26,
        '-' => 27,
        '8' => 28,
        '0' => 29,
        ']' => 30,
        'o' => 31,
        'u' => 32,
        '[' => 33,
        'i' => 34,
        'p' => 35,
        'l' => 37,
        'j' => 38,
        '\'' => 39,
        'k' => 40,
        ';' => 41,
        '\\' => 42,
        ',' => 43,
        '/' => 44,
        'n' => 45,
        'm' => 46,
        '.' => 47,
        '`' => 50,
        ' ' => 49,
        _ => return None,
    };
    Some(code)
}

/// Keycode for a digit character; digits are always in the table.
pub fn keycode_for_digit(digit: u8) -> u16 {
    debug_assert!(digit <= 9);
    let c = (b'0' + digit) as char;
    keycode_for_char(c).expect("digit keycodes are always mapped")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_letters_and_digits_are_mapped() {
        for c in 'a'..='z' {
            assert!(keycode_for_char(c).is_some(), "unmapped letter {c:?}");
        }
        for c in '0'..='9' {
            assert!(keycode_for_char(c).is_some(), "unmapped digit {c:?}");
        }
    }

    #[test]
    fn punctuation_table_is_complete() {
        for c in [',', '.', ';', '\'', '[', ']', '\\', '/', '`', '-', '=', ' '] {
            assert!(keycode_for_char(c).is_some(), "unmapped {c:?}");
        }
    }

    #[test]
    fn unsupported_characters_are_rejected() {
        assert_eq!(keycode_for_char('A'), None);
        assert_eq!(keycode_for_char('é'), None);
        assert_eq!(keycode_for_char('\t'), None);
    }

    #[test]
    fn digit_keycodes_match_ansi_layout() {
        assert_eq!(keycode_for_digit(0), 29);
        assert_eq!(keycode_for_digit(1), 18);
        assert_eq!(keycode_for_digit(5), 23);
        assert_eq!(keycode_for_digit(9), 25);
    }

    #[test]
    fn bracket_constants_agree_with_table() {
        assert_eq!(keycode_for_char('['), Some(KC_LEFT_BRACKET));
        assert_eq!(keycode_for_char(']'), Some(KC_RIGHT_BRACKET));
    }
}
