//! dent - list one directory, one name per line
//!
//! Enumerates a single directory, filters dot entries, and prints names
//! sorted case-insensitively (or in enumeration order with `-u`).

pub mod buffer;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod sort;
pub mod source;

pub use buffer::DisplayBuffer;
pub use config::Config;
pub use error::{AllocError, ListError};
pub use filter::{FilterChain, SelectionFilter};
pub use output::Printer;
pub use pipeline::Pipeline;
pub use sort::compare_names;
pub use source::{Entry, EntrySource};
