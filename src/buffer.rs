//! Deferred-output storage for sorted mode

use std::io::{self, Write};

use crate::error::{AllocError, ListError};
use crate::output::Printer;
use crate::sort::compare_names;
use crate::source::Entry;

/// Entries reserved by the first append.
const INITIAL_CAPACITY: usize = 8;

/// Growable store for entries awaiting sorted output.
///
/// Capacity is managed explicitly: nothing is allocated until the first
/// append, growth always doubles, and a failed reservation surfaces as a
/// [`ListError`] instead of aborting the process. Capacity never shrinks
/// for the lifetime of a run, so appends are O(1) amortized.
#[derive(Debug, Default)]
pub struct DisplayBuffer {
    entries: Vec<Entry>,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry in arrival order, growing the buffer if it is full.
    pub fn append(&mut self, entry: Entry) -> Result<(), ListError> {
        if self.entries.len() == self.entries.capacity() {
            self.grow()?;
        }
        self.entries.push(entry);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ListError> {
        let capacity = self.entries.capacity();
        let target = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity
                .checked_mul(2)
                .ok_or(ListError::Alloc(AllocError::CapacityOverflow))?
        };
        self.entries
            .try_reserve_exact(target - self.entries.len())
            .map_err(|_| ListError::Alloc(AllocError::OutOfMemory))
    }

    /// Sort everything that was buffered, then print it in order.
    ///
    /// A buffer that never received an entry is a no-op, not an error.
    /// The sort is unstable: names equal after case folding come out in
    /// unspecified relative order.
    pub fn finalize_and_emit<W: Write>(&mut self, printer: &mut Printer<W>) -> io::Result<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        self.entries
            .sort_unstable_by(|a, b| compare_names(&a.name, &b.name));
        for entry in &self.entries {
            printer.print(entry)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Buffered entries in arrival order (before `finalize_and_emit`).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
