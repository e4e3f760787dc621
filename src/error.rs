use std::{io, path::PathBuf};

use thiserror::Error;

/// Coarse classification of a [`CompareError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A path does not exist or could not be opened.
    NotFound,
    /// Reading or decoding failed after the file was opened.
    IoFailure,
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line} of {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadChunk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } => ErrorKind::NotFound,
            Self::Read { .. } | Self::ReadChunk { .. } => ErrorKind::IoFailure,
        }
    }

    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } | Self::ReadChunk { path, .. } => {
                path
            }
        }
    }
}
