//! Strongly-typed view of the HID boot keyboard modifier byte.

use ::deku::prelude::*;

/// Struct representation of the HID keyboard modifier bitmask.
///
/// Bitfield definition (HID Usage Tables, Keyboard/Keypad page, usages
/// `0xE0`-`0xE7`), most significant bit first:
///
/// | bit | mask   | key         |
/// |-----|--------|-------------|
/// | 7   | `0x80` | Right GUI   |
/// | 6   | `0x40` | Right Alt   |
/// | 5   | `0x20` | Right Shift |
/// | 4   | `0x10` | Right Ctrl  |
/// | 3   | `0x08` | Left GUI    |
/// | 2   | `0x04` | Left Alt    |
/// | 1   | `0x02` | Left Shift  |
/// | 0   | `0x01` | Left Ctrl   |
///
/// Only the two shift flags influence decoding. The remaining flags are parsed
/// so they can be inspected, but text reconstruction ignores them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, DekuRead)]
#[deku(endian = "big")]
pub struct Modifiers {
    /// Bit 7. Right GUI (meta/windows/command) key.
    #[deku(bits = "1")]
    pub right_meta: bool,

    /// Bit 6. Right Alt key.
    #[deku(bits = "1")]
    pub right_alt: bool,

    /// Bit 5. Right Shift key.
    #[deku(bits = "1")]
    pub right_shift: bool,

    /// Bit 4. Right Ctrl key.
    #[deku(bits = "1")]
    pub right_ctrl: bool,

    /// Bit 3. Left GUI (meta/windows/command) key.
    #[deku(bits = "1")]
    pub left_meta: bool,

    /// Bit 2. Left Alt key.
    #[deku(bits = "1")]
    pub left_alt: bool,

    /// Bit 1. Left Shift key.
    #[deku(bits = "1")]
    pub left_shift: bool,

    /// Bit 0. Left Ctrl key.
    #[deku(bits = "1")]
    pub left_ctrl: bool,
}

impl Modifiers {
    /// Left shift mask.
    pub const LEFT_SHIFT: u8 = 0x02;
    /// Right shift mask.
    pub const RIGHT_SHIFT: u8 = 0x20;

    /// Returns `true` if either shift key is held. Left and right shift are
    /// treated identically.
    pub const fn is_shifted(&self) -> bool {
        self.left_shift || self.right_shift
    }

    /// Reassembles the raw modifier byte.
    pub fn bits(&self) -> u8 {
        [
            self.left_ctrl,
            self.left_shift,
            self.left_alt,
            self.left_meta,
            self.right_ctrl,
            self.right_shift,
            self.right_alt,
            self.right_meta,
        ]
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }
}

impl From<u8> for Modifiers {
    fn from(byte: u8) -> Self {
        Self::from_bytes((&[byte], 0))
            .expect("A single byte always holds the eight modifier flags")
            .1
    }
}
