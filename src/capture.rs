//! Loading of raw capture files.

use ::std::path::{Path, PathBuf};
use ::tap::Pipe;
use ::tracing::debug;

use crate::errors::{Context, Result};

/// A raw capture held entirely in memory.
///
/// The file handle is only held for the duration of [`Capture::open`]; the
/// bytes are never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl Capture {
    /// Reads the whole file at `path` as raw bytes.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading capture");

        ::std::fs::read(path)
            .context(path)?
            .pipe(|bytes| Self::from_bytes(path, bytes))
            .pipe(Ok)
    }

    /// Wraps bytes which have already been loaded.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// The path the capture was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the capture in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
