//! Configuration for the listing pipeline

use std::path::PathBuf;

/// Listing behavior, fixed once argument parsing finishes and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to list.
    pub directory: PathBuf,
    /// Show `.` and `..` and other dot-prefixed names (`-a`).
    pub show_all: bool,
    /// Hide every name starting with `.` (`-n`).
    pub no_dotfiles: bool,
    /// Print entries as encountered instead of buffering and sorting (`-u`).
    pub unordered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            show_all: false,
            no_dotfiles: false,
            unordered: false,
        }
    }
}
