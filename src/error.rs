use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the I/O boundary of the crate.
///
/// Building and scanning an automaton cannot fail; only loading dictionaries
/// and texts from disk can.
#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary or input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
