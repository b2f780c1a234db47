//! Pipeline controller: wires source, filters, and output together

use std::io::Write;

use crate::buffer::DisplayBuffer;
use crate::config::Config;
use crate::error::ListError;
use crate::filter::FilterChain;
use crate::output::Printer;
use crate::source::EntrySource;

/// Where selected entries go during enumeration.
enum EntrySink {
    /// Buffer now, sort and print after the directory is closed.
    Buffered(DisplayBuffer),
    /// Print as encountered (unordered mode).
    Immediate,
}

/// Drives one listing run: open, enumerate, filter, dispatch, emit.
///
/// Owns the configuration, the filter chain, and the dispatch sink for the
/// lifetime of the run. The directory handle and buffer are dropped on
/// every return path, success or error.
pub struct Pipeline {
    config: Config,
    filters: FilterChain,
    sink: EntrySink,
}

impl Pipeline {
    /// Build the filter chain and dispatch mode once from the parsed
    /// configuration.
    pub fn new(config: Config) -> Self {
        let filters = FilterChain::from_config(&config);
        let sink = if config.unordered {
            EntrySink::Immediate
        } else {
            EntrySink::Buffered(DisplayBuffer::new())
        };
        Self {
            config,
            filters,
            sink,
        }
    }

    /// Run the pipeline to completion, writing selected names to `writer`.
    ///
    /// A read error mid-enumeration truncates the listing with a warning
    /// on stderr rather than failing the run.
    pub fn run<W: Write>(&mut self, writer: W) -> Result<(), ListError> {
        let mut printer = Printer::new(writer);
        let mut source = EntrySource::open(&self.config.directory)?;

        while let Some(entry) = source.next() {
            if !self.filters.selects(&entry) {
                continue;
            }
            match &mut self.sink {
                EntrySink::Buffered(buffer) => buffer.append(entry)?,
                EntrySink::Immediate => printer.print(&entry)?,
            }
        }

        if let Some(e) = source.take_read_error() {
            eprintln!(
                "dent: warning: stopped reading '{}': {}",
                self.config.directory.display(),
                e
            );
        }
        // Directory handle released before sorting begins.
        drop(source);

        if let EntrySink::Buffered(buffer) = &mut self.sink {
            buffer.finalize_and_emit(&mut printer)?;
        }
        Ok(())
    }
}
