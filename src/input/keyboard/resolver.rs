//! Resolution of a single keyboard record into a text token.

use ::std::fmt::{self, Display};
use ::tracing::trace;

use super::{base_symbol, shifted_symbol, BaseSymbol, ControlKey, Modifiers, NO_KEY};

/// The meaning of one record after resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A printable character, with shift already applied.
    Char(char),
    /// A named control key, unaffected by shift.
    Control(ControlKey),
    /// A keycode outside the known table, kept for display.
    Unknown(u8),
}

impl Token {
    /// Whether the token is a single literal character, as opposed to a named
    /// or unknown key.
    pub const fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{ch}"),
            Self::Control(key) => write!(f, "<{key}>"),
            Self::Unknown(keycode) => write!(f, "<KC_{keycode:02x}>"),
        }
    }
}

/// Resolves a `(keycode, modifiers)` pair into a [`Token`].
///
/// Returns `None` for keycode `0x00`, which means no key is pressed and
/// should be skipped rather than rendered. Every other input resolves to a
/// token; unknown keycodes become [`Token::Unknown`].
///
/// Only the shift flags have any effect:
/// - control keys are returned unchanged,
/// - digits and punctuation map through the US shift table,
/// - lowercase letters are uppercased,
/// - anything else (space) is returned unchanged.
pub fn resolve(keycode: u8, modifiers: Modifiers) -> Option<Token> {
    if keycode == NO_KEY {
        return None;
    }

    let Some(symbol) = base_symbol(keycode) else {
        trace!(keycode, "Unknown keycode");
        return Some(Token::Unknown(keycode));
    };

    let token = match symbol {
        BaseSymbol::Control(key) => Token::Control(key),
        BaseSymbol::Char(ch) if !modifiers.is_shifted() => Token::Char(ch),
        BaseSymbol::Char(ch) => Token::Char(
            shifted_symbol(ch).unwrap_or_else(|| ch.to_ascii_uppercase()),
        ),
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::strum::IntoEnumIterator;

    fn resolve_raw(keycode: u8, modifier: u8) -> Option<Token> {
        resolve(keycode, Modifiers::from(modifier))
    }

    #[test]
    fn test_total_over_full_domain() {
        for keycode in 0..=u8::MAX {
            for modifier in 0..=u8::MAX {
                let token = resolve_raw(keycode, modifier);
                assert_eq!(token.is_none(), keycode == NO_KEY);
            }
        }
    }

    #[test]
    fn test_no_key_is_absent() {
        for modifier in 0..=u8::MAX {
            assert_eq!(resolve_raw(0x00, modifier), None);
        }
    }

    #[test]
    fn test_enter_ignores_shift() {
        for modifier in 0..=u8::MAX {
            assert_eq!(
                resolve_raw(0x28, modifier),
                Some(Token::Control(ControlKey::Enter))
            );
        }
    }

    #[test]
    fn test_all_controls_ignore_shift() {
        for (keycode, key) in (0x28..=0x2B).zip(ControlKey::iter()) {
            assert_eq!(
                resolve_raw(keycode, Modifiers::LEFT_SHIFT | Modifiers::RIGHT_SHIFT),
                Some(Token::Control(key))
            );
        }
    }

    #[test]
    fn test_letter_case() {
        assert_eq!(resolve_raw(0x04, 0x00), Some(Token::Char('a')));
        assert_eq!(resolve_raw(0x04, Modifiers::LEFT_SHIFT), Some(Token::Char('A')));
        assert_eq!(resolve_raw(0x04, Modifiers::RIGHT_SHIFT), Some(Token::Char('A')));
        assert_eq!(resolve_raw(0x1D, 0x02), Some(Token::Char('Z')));
    }

    #[test]
    fn test_shift_symbols() {
        assert_eq!(resolve_raw(0x1E, 0x00), Some(Token::Char('1')));
        assert_eq!(resolve_raw(0x1E, Modifiers::RIGHT_SHIFT), Some(Token::Char('!')));
        assert_eq!(resolve_raw(0x27, 0x02), Some(Token::Char(')')));
        assert_eq!(resolve_raw(0x31, 0x02), Some(Token::Char('|')));
        assert_eq!(resolve_raw(0x38, 0x20), Some(Token::Char('?')));
    }

    #[test]
    fn test_space_has_no_shifted_form() {
        assert_eq!(resolve_raw(0x2C, 0x00), Some(Token::Char(' ')));
        assert_eq!(resolve_raw(0x2C, 0x22), Some(Token::Char(' ')));
    }

    /// Ctrl, alt and meta leave the character untouched.
    #[test]
    fn test_other_modifiers_ignored() {
        for modifier in [0x01, 0x04, 0x08, 0x10, 0x40, 0x80, 0xDD] {
            assert_eq!(resolve_raw(0x04, modifier), Some(Token::Char('a')));
            assert_eq!(resolve_raw(0x1E, modifier), Some(Token::Char('1')));
        }
    }

    #[test]
    fn test_unknown_keycode() {
        let token = resolve_raw(0xFF, 0x00);
        assert_eq!(token, Some(Token::Unknown(0xFF)));
        assert!(token.unwrap().to_string().contains("ff"));
        assert_eq!(resolve_raw(0x32, 0x02), Some(Token::Unknown(0x32)));
        assert_eq!(resolve_raw(0x01, 0x00), Some(Token::Unknown(0x01)));
    }

    #[test]
    fn test_is_char() {
        assert!(Token::Char(' ').is_char());
        assert!(!Token::Control(ControlKey::Tab).is_char());
        assert!(!Token::Unknown(0x39).is_char());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Token::Char('q').to_string(), "q");
        assert_eq!(Token::Control(ControlKey::Enter).to_string(), "<ENTER>");
        assert_eq!(Token::Control(ControlKey::Escape).to_string(), "<ESC>");
        assert_eq!(Token::Control(ControlKey::Backspace).to_string(), "<BACKSPACE>");
        assert_eq!(Token::Control(ControlKey::Tab).to_string(), "<TAB>");
        assert_eq!(Token::Unknown(0x0a).to_string(), "<KC_0a>");
        assert_eq!(Token::Unknown(0xff).to_string(), "<KC_ff>");
    }
}
