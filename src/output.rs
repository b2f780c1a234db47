//! Line-oriented name output

use std::io::{self, Write};

use crate::source::Entry;

/// Writes one entry name per line to the wrapped sink.
///
/// No buffering beyond what the sink itself provides; write failures
/// propagate to the caller.
pub struct Printer<W: Write> {
    writer: W,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `entry`'s name followed by a newline.
    pub fn print(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(self.writer, "{}", entry.name)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_one_name_per_line() {
        let mut printer = Printer::new(Vec::new());
        printer.print(&Entry::new("first")).unwrap();
        printer.print(&Entry::new("second")).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "first\nsecond\n");
    }
}
