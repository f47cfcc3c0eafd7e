//! Error types for loading translation documents.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = XliffError> = std::result::Result<T, E>;

/// Errors raised while loading documents or translation directories.
///
/// Lookups never produce these: an unknown language falls back to the
/// base language and an unknown id yields an empty string.
#[derive(Error, Debug)]
pub enum XliffError {
    /// The path could not be read, opened, or listed.
    #[error("Failed to access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The load path exists but is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The file name does not have the form `<language>.xliff`.
    #[error("Invalid file name: '{}' (expected <language>.xliff)", .0.display())]
    InvalidFileName(PathBuf),
    /// The document is not well-formed XML or does not fit the expected structure.
    #[error("Failed to decode XLIFF document '{}'", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
    /// The document could not be serialized.
    #[error("Failed to encode XLIFF document: {0}")]
    Encode(String),
}

impl XliffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
