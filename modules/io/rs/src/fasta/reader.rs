use std::io::BufRead;
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{ensure, Result};

use super::record::Record;
use crate::compression;
use crate::traits::ReadRecord;

/// A strict FASTA reader that can read a single record at a time. Ignores:
/// - Carriage return characters at the end of all lines (to support Windows line endings)
/// - Empty lines anywhere in the input
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - Extra characters before the first record
/// - Non-alphabetic characters inside the sequence, including start/end of lines
/// - Empty ID or sequence fields in any record
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    /// Create a new FASTA reader from the given file path.
    /// Gzip compression is detected from the file signature.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Box<dyn ReadRecord<Record = Record> + Send + 'static>> {
        let stream = compression::read_file(path)?;
        Ok(Box::new(Reader::new(stream)))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    // Consumes empty lines, returns false on EOF
    fn skip_empty_lines(&mut self) -> Result<bool> {
        loop {
            let buffer = self.reader.fill_buf()?;
            match buffer.first().copied() {
                None => return Ok(false),
                Some(b'\n') => self.reader.consume(1),
                Some(b'\r') => {
                    // The '\n' may only be available after the next fill
                    self.reader.consume(1);
                    let next = self.reader.fill_buf()?.first().copied();
                    ensure!(
                        next == Some(b'\n'),
                        "Expected '>' at the start of the FASTA record"
                    );
                    self.reader.consume(1);
                }
                _ => return Ok(true),
            }
        }
    }

    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        if !self.skip_empty_lines()? {
            return Ok(false);
        }

        // Ensure that the next symbol is '>' and consume it
        let buffer = self.reader.fill_buf()?;
        ensure!(
            buffer.first() == Some(&b'>'),
            "Expected '>' at the start of the FASTA record"
        );
        self.reader.consume(1);

        let (id, seq) = record.buffers();

        // Read the ID line
        id.clear();
        let read = self.reader.read_line(id)?;
        ensure!(read > 0, "Unexpected EOF after '>'");
        ensure!(
            id.ends_with('\n'),
            "FASTA ID line is not terminated with a newline: {id}"
        );
        id.pop();
        if id.ends_with('\r') {
            id.pop();
        }

        // Read the sequence lines up to the next record or EOF. A line can span several buffer
        // fills, so '>' only starts a record at the beginning of a line and a trailing '\r' is
        // held back until it is known whether '\n' follows.
        seq.clear();
        let mut line_start = true;
        let mut pending_cr = false;
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() || (line_start && buffer[0] == b'>') {
                break;
            }

            // Find the end of the line if it exists
            let (chunk, consume, line_end) = match memchr::memchr(b'\n', buffer) {
                Some(pos) => (&buffer[..pos], pos + 1, true),
                None => (buffer, buffer.len(), false),
            };

            if pending_cr && !(line_end && chunk.is_empty()) {
                seq.push(b'\r');
            }
            let (chunk, cr) = match chunk.split_last() {
                Some((&b'\r', rest)) => (rest, true),
                _ => (chunk, false),
            };
            pending_cr = cr && !line_end;
            line_start = line_end;

            // Empty lines contribute nothing
            seq.extend_from_slice(chunk);
            self.reader.consume(consume);
        }
        if pending_cr {
            seq.push(b'\r');
        }

        record.finalize()?;
        Ok(true)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given [Record] buffer.
    ///
    /// The read is successful only if the function returns `Ok(true)`.
    /// Otherwise, the buffer is left in an unspecified state, but can be reused for the next read.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }
}
