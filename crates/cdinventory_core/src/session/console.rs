//! Line-oriented terminal I/O for the session loop.

use crate::model::record::RecordStore;
use std::error::Error;
use std::io::{self, BufRead, Write};

const INVENTORY_HEADER: &str = "\n======= The Current Inventory: =======\nID\tCD Title (by: Artist)\n";
const INVENTORY_FOOTER: &str = "======================================";

/// Blocking prompt/print helpers over any `BufRead` + `Write` pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line break is removed;
    /// other whitespace is left for the caller to interpret.
    ///
    /// # Errors
    /// - `ErrorKind::InvalidData` when the line is not UTF-8. The whole line is
    ///   consumed first, so the next prompt reads the following line.
    /// - Any other error from the underlying reader or writer.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints the whole table, one record per line, in store order.
    pub fn show_inventory(&mut self, store: &RecordStore) -> io::Result<()> {
        writeln!(self.output, "{INVENTORY_HEADER}")?;
        for record in store {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "{INVENTORY_FOOTER}")
    }

    /// Prints a failure heading followed by the error and its source chain.
    pub fn report(&mut self, heading: &str, err: &dyn Error) -> io::Result<()> {
        writeln!(self.output, "\n{heading}")?;
        writeln!(self.output, "Detailed error message: ")?;
        writeln!(self.output, "{err}")?;
        let mut source = err.source();
        while let Some(cause) = source {
            writeln!(self.output, "caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
