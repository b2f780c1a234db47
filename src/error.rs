//! Error types for the listing pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors surfaced to the user. Every variant terminates the run;
/// nothing is retried.
#[derive(Debug)]
pub enum ListError {
    /// The target path could not be opened as a directory.
    Open { path: PathBuf, source: io::Error },
    /// The display buffer could not grow.
    Alloc(AllocError),
    /// Writing a name to the output stream failed.
    Io(io::Error),
}

/// Why a display-buffer reservation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// Doubling the capacity overflowed `usize`.
    CapacityOverflow,
    /// The allocator refused the reservation.
    OutOfMemory,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot access '{}': {}", path.display(), source)
            }
            Self::Alloc(AllocError::CapacityOverflow) => {
                write!(f, "display buffer overflow computing next capacity")
            }
            Self::Alloc(AllocError::OutOfMemory) => {
                write!(f, "out of memory growing display buffer")
            }
            Self::Io(source) => write!(f, "error writing output: {}", source),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Io(source) => Some(source),
            Self::Alloc(_) => None,
        }
    }
}

impl From<io::Error> for ListError {
    fn from(source: io::Error) -> Self {
        Self::Io(source)
    }
}
