//! Fatal error types for the BrickLang compiler.
//!
//! Compilation problems (bad tokens, grammar violations, duplicate names) are
//! never reported through this type; they accumulate in a
//! [`Diagnostics`](crate::Diagnostics) sink instead. `Error` covers the few
//! conditions that interrupt control flow outright.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for results carrying a fatal [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for BrickLang operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an error signalling that compilation produced diagnostics.
    #[must_use]
    pub fn compilation_failed(count: usize) -> Self {
        Self::new(ErrorKind::CompilationFailed { count })
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The source file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// A model could not be rendered to its structured form.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Compilation finished but recorded diagnostics.
    #[error("compilation failed with {count} error(s)")]
    CompilationFailed {
        /// Number of diagnostics recorded.
        count: usize,
    },
}
