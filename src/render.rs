//! Rendering of decoded keyboard records for visual inspection.
//!
//! Both [`Layout`] hypotheses are always rendered one after the other. The
//! analyst judges which one reads as plausible text; no attempt is made to
//! pick one automatically.

use ::std::{
    fmt::{self, Display},
    io::{self, Write},
};
use ::strum::IntoEnumIterator;
use ::tracing::debug;

use crate::{
    capture::Capture,
    input::keyboard::{records, resolve, Layout, Record, Token},
};

/// Width of the `=` banner lines around each section title.
pub const BANNER_WIDTH: usize = 40;

/// Label printed ahead of the reconstructed string.
pub const RECONSTRUCTED_LABEL: &str = "Reconstructed (best-effort):";

/// A record together with the token it resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedKey {
    pub record: Record,
    pub token: Token,
}

impl DecodedKey {
    /// The token's contribution to the reconstructed string. Characters are
    /// emitted literally, named and unknown keys in square brackets.
    pub fn text(&self) -> String {
        if self.token.is_char() {
            self.token.to_string()
        } else {
            format!("[{}]", self.token)
        }
    }
}

/// Formats as one detail listing line.
impl Display for DecodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            record: Record {
                offset,
                keycode,
                modifier,
            },
            token,
        } = self;

        write!(
            f,
            "0x{offset:06x}: key=0x{keycode:02x} mod=0x{modifier:02x} -> {token}"
        )
    }
}

/// Lazily decodes `buffer` under `layout`, skipping records where no key was
/// pressed.
pub fn decode(buffer: &[u8], layout: Layout) -> impl Iterator<Item = DecodedKey> + '_ {
    records(buffer, layout).filter_map(|record| {
        resolve(record.keycode, record.modifiers()).map(|token| DecodedKey { record, token })
    })
}

/// The decoded keys of a capture under a single layout hypothesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    layout: Layout,
    keys: Vec<DecodedKey>,
}

impl Transcript {
    /// Decodes the whole buffer under the given layout.
    pub fn new(buffer: &[u8], layout: Layout) -> Self {
        let keys: Vec<_> = decode(buffer, layout).collect();
        debug!(
            ?layout,
            records = buffer.len() / 2,
            keys = keys.len(),
            "Decoded capture"
        );
        Self { layout, keys }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Decoded keys in capture order.
    pub fn keys(&self) -> &[DecodedKey] {
        &self.keys
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.keys.iter().map(|key| key.token)
    }

    /// One detail line per decoded key, in capture order.
    pub fn detail_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.keys.iter().map(ToString::to_string)
    }

    /// Best-effort reconstruction of the typed text.
    pub fn reconstructed(&self) -> String {
        self.keys.iter().map(DecodedKey::text).collect()
    }

    /// Writes the bannered section for this transcript: title, detail
    /// listing, then the reconstructed string.
    pub fn write_section<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(out, "{banner}")?;
        writeln!(out, "{}", self.layout())?;
        writeln!(out, "{banner}")?;
        for line in self.detail_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "{RECONSTRUCTED_LABEL}")?;
        writeln!(out, "{}", self.reconstructed())?;
        writeln!(out)
    }
}

/// Writes the header line for a capture.
pub fn write_header<W: Write>(out: &mut W, capture: &Capture) -> io::Result<()> {
    writeln!(
        out,
        "File: {}  size={} bytes",
        capture.path().display(),
        capture.len()
    )
}

/// Writes the full report: header, then one section per layout hypothesis in
/// fixed order.
pub fn write_report<W: Write>(out: &mut W, capture: &Capture) -> io::Result<()> {
    write_header(out, capture)?;
    Layout::iter()
        .try_for_each(|layout| Transcript::new(capture.bytes(), layout).write_section(out))
}
