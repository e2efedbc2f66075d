//! HID keyboard usage codes and their US-layout symbols.

use ::lazy_static::lazy_static;
use ::maplit::hashmap;
use ::std::collections::HashMap;
use ::strum::{Display, EnumIter, IntoStaticStr};

/// Keycode reported when no key is pressed in a report slot.
pub const NO_KEY: u8 = 0x00;

/// Named, non-printing keys from the keycode table. Shift never alters these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ControlKey {
    #[strum(serialize = "ENTER")]
    Enter,
    #[strum(serialize = "ESC")]
    Escape,
    #[strum(serialize = "BACKSPACE")]
    Backspace,
    #[strum(serialize = "TAB")]
    Tab,
}

/// The unshifted meaning of a keycode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseSymbol {
    /// A printable character, as produced without shift held.
    Char(char),
    /// A named control key.
    Control(ControlKey),
}

lazy_static! {
    /// Usage ID to base symbol for the Keyboard/Keypad page subset `0x04`-`0x38`.
    /// `0x32` (Non-US `#`) is deliberately absent.
    static ref KEYCODE_TABLE: HashMap<u8, BaseSymbol> = {
        use BaseSymbol::{Char as C, Control};

        hashmap! {
            // letters
            0x04 => C('a'), 0x05 => C('b'), 0x06 => C('c'), 0x07 => C('d'),
            0x08 => C('e'), 0x09 => C('f'), 0x0A => C('g'), 0x0B => C('h'),
            0x0C => C('i'), 0x0D => C('j'), 0x0E => C('k'), 0x0F => C('l'),
            0x10 => C('m'), 0x11 => C('n'), 0x12 => C('o'), 0x13 => C('p'),
            0x14 => C('q'), 0x15 => C('r'), 0x16 => C('s'), 0x17 => C('t'),
            0x18 => C('u'), 0x19 => C('v'), 0x1A => C('w'), 0x1B => C('x'),
            0x1C => C('y'), 0x1D => C('z'),
            // top row digits
            0x1E => C('1'), 0x1F => C('2'), 0x20 => C('3'), 0x21 => C('4'),
            0x22 => C('5'), 0x23 => C('6'), 0x24 => C('7'), 0x25 => C('8'),
            0x26 => C('9'), 0x27 => C('0'),
            // controls and space
            0x28 => Control(ControlKey::Enter),
            0x29 => Control(ControlKey::Escape),
            0x2A => Control(ControlKey::Backspace),
            0x2B => Control(ControlKey::Tab),
            0x2C => C(' '),
            // punctuation
            0x2D => C('-'), 0x2E => C('='), 0x2F => C('['), 0x30 => C(']'),
            0x31 => C('\\'), 0x33 => C(';'), 0x34 => C('\''), 0x35 => C('`'),
            0x36 => C(','), 0x37 => C('.'), 0x38 => C('/'),
        }
    };

    /// Unshifted printable symbol to its shifted counterpart on a US layout.
    static ref SHIFT_TABLE: HashMap<char, char> = hashmap! {
        '1' => '!', '2' => '@', '3' => '#', '4' => '$', '5' => '%',
        '6' => '^', '7' => '&', '8' => '*', '9' => '(', '0' => ')',
        '-' => '_', '=' => '+', '[' => '{', ']' => '}', '\\' => '|',
        ';' => ':', '\'' => '"', '`' => '~', ',' => '<', '.' => '>',
        '/' => '?',
    };
}

/// Looks up the unshifted symbol for a keycode, if the keycode is known.
pub fn base_symbol(keycode: u8) -> Option<BaseSymbol> {
    KEYCODE_TABLE.get(&keycode).copied()
}

/// Looks up the shifted counterpart of a digit or punctuation symbol.
pub fn shifted_symbol(ch: char) -> Option<char> {
    SHIFT_TABLE.get(&ch).copied()
}
