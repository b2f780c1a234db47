//! Entry selection filters

use crate::config::Config;
use crate::source::Entry;

/// A single selection predicate over an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFilter {
    /// Rejects exactly `.` and `..`; every other name passes, including
    /// other dot-prefixed names.
    NoDotDir,
    /// Rejects any name beginning with `.`.
    NotStartingWithDot,
}

impl SelectionFilter {
    /// Whether `entry` passes this filter.
    pub fn selects(&self, entry: &Entry) -> bool {
        match self {
            Self::NoDotDir => entry.name != "." && entry.name != "..",
            Self::NotStartingWithDot => !entry.name.starts_with('.'),
        }
    }
}

/// Ordered conjunction of selection filters, built once from the parsed
/// configuration and immutable afterwards.
#[derive(Debug, Default)]
pub struct FilterChain {
    filters: Vec<SelectionFilter>,
}

impl FilterChain {
    /// Install filters per the flags: the dot-dir filter unless show-all,
    /// then the dotfile filter if no-dotfiles. With both flags set the
    /// dot-dir filter is redundant but harmless.
    pub fn from_config(config: &Config) -> Self {
        let mut filters = Vec::with_capacity(2);
        if !config.show_all {
            filters.push(SelectionFilter::NoDotDir);
        }
        if config.no_dotfiles {
            filters.push(SelectionFilter::NotStartingWithDot);
        }
        Self { filters }
    }

    /// An entry is selected iff every installed filter accepts it; the
    /// check short-circuits on the first rejection. An empty chain selects
    /// everything.
    pub fn selects(&self, entry: &Entry) -> bool {
        self.filters.iter().all(|f| f.selects(entry))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
