//! Crate-specific error and result types, plus common conversions.

use ::std::{io, path::PathBuf};

/// Result type returned by functions that touch the file system.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for the capture decoder. Decoding itself never fails; the only
/// failures are those of reading the capture and writing the report.
#[derive(Debug, ::thiserror::Error)]
pub enum Error {
    /// The capture file could not be opened or read. The underlying platform
    /// error is kept as the source so its message is surfaced unchanged.
    #[error("Failed to read capture file '{}'", .path.display())]
    Io {
        /// The path which was being read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be written out, e.g. a closed stdout pipe.
    #[error("Failed to write report")]
    Output(#[from] io::Error),
}

impl Error {
    /// Returns the underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } | Self::Output(source) => source.kind(),
        }
    }
}

/// A crate-private trait which allows the offending path to be attached to
/// fallible I/O results.
pub(crate) trait Context<T> {
    /// Attach the path which was being accessed and return crate error.
    fn context(self, path: impl Into<PathBuf>) -> Result<T>
    where
        Self: Sized;
}

impl<T> Context<T> for io::Result<T> {
    fn context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}
