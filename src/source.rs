//! Directory entry enumeration

use std::fs::{self, ReadDir};
use std::io;
use std::path::Path;

use crate::error::ListError;

/// One directory entry; only the name is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lazy, finite, non-restartable stream of entries for one opened directory.
///
/// `fs::read_dir` never reports the `.` and `..` entries, so the source
/// synthesizes them ahead of the stream; the default filter chain removes
/// them again unless the show-all flag keeps them.
///
/// The underlying handle is closed when the source is dropped.
pub struct EntrySource {
    inner: ReadDir,
    synthetic: std::array::IntoIter<Entry, 2>,
    read_error: Option<io::Error>,
}

impl EntrySource {
    /// Open `path` for enumeration. Fails if the path does not exist, is
    /// not a directory, or is not readable; the OS error text is carried
    /// in the returned error.
    pub fn open(path: &Path) -> Result<Self, ListError> {
        let inner = fs::read_dir(path).map_err(|source| ListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner,
            synthetic: [Entry::new("."), Entry::new("..")].into_iter(),
            read_error: None,
        })
    }

    /// The error that cut enumeration short, if any. Taking it clears it.
    pub fn take_read_error(&mut self) -> Option<io::Error> {
        self.read_error.take()
    }
}

impl Iterator for EntrySource {
    type Item = Entry;

    /// Yields entries in whatever order the OS returns them.
    ///
    /// A read error mid-stream ends enumeration instead of failing the
    /// run; the caller can inspect it via [`EntrySource::take_read_error`]
    /// and warn.
    fn next(&mut self) -> Option<Entry> {
        if let Some(entry) = self.synthetic.next() {
            return Some(entry);
        }
        if self.read_error.is_some() {
            return None;
        }
        match self.inner.next() {
            Some(Ok(entry)) => Some(Entry::new(entry.file_name().to_string_lossy())),
            Some(Err(e)) => {
                self.read_error = Some(e);
                None
            }
            None => None,
        }
    }
}
