//! Splitting of raw capture bytes into two-byte keyboard records.

use ::std::{iter::FusedIterator, slice::ChunksExact};
use ::strum::{Display, EnumIter};
use ::tracing::trace;

use super::Modifiers;

/// Width of a single record in bytes.
pub const RECORD_LEN: usize = 2;

/// The assumed ordering of keycode and modifier within each record. The true
/// ordering can't be recovered from the bytes alone, so both are decoded.
///
/// Variants iterate in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Layout {
    /// Byte 0 is the keycode, byte 1 the modifier bitmask.
    #[strum(serialize = "Decoded as (low-byte = key, high-byte = modifier)")]
    KeyFirst,
    /// Byte 0 is the modifier bitmask, byte 1 the keycode.
    #[strum(serialize = "Decoded as (high-byte = key, low-byte = modifier)")]
    ModifierFirst,
}

impl Layout {
    /// Interprets a two-byte window as `(keycode, modifier)`.
    const fn split(self, pair: [u8; RECORD_LEN]) -> (u8, u8) {
        match self {
            Self::KeyFirst => (pair[0], pair[1]),
            Self::ModifierFirst => (pair[1], pair[0]),
        }
    }
}

/// A two-byte window of the capture interpreted under a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    /// Byte index of the record's first byte in the capture.
    pub offset: usize,
    pub keycode: u8,
    /// The raw modifier byte, as captured.
    pub modifier: u8,
}

impl Record {
    /// The modifier byte parsed into individual flags.
    pub fn modifiers(&self) -> Modifiers {
        self.modifier.into()
    }
}

/// Lazy iterator over the [`Record`]s of a capture, in ascending offset
/// order. Created by [`records`], which may be called again on the same
/// buffer to start over.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    chunks: ChunksExact<'a, u8>,
    layout: Layout,
    offset: usize,
}

/// Splits `buffer` into records under the given layout hypothesis.
///
/// A trailing odd byte is ignored.
pub fn records(buffer: &[u8], layout: Layout) -> Records<'_> {
    let chunks = buffer.chunks_exact(RECORD_LEN);
    if !chunks.remainder().is_empty() {
        trace!(len = buffer.len(), ?layout, "Ignoring trailing odd byte");
    }

    Records {
        chunks,
        layout,
        offset: 0,
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let (keycode, modifier) = self.layout.split([chunk[0], chunk[1]]);
        let record = Record {
            offset: self.offset,
            keycode,
            modifier,
        };
        self.offset += RECORD_LEN;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}
