//! Streaming FASTA reader.
//!
//! [`FastaReader`] pulls one line at a time from a byte source and hands out one complete
//! [`Record`] per successful [`FastaReader::advance`]. Use it either through the
//! advance / [`record`](FastaReader::record) / [`error`](FastaReader::error) calls, or as an
//! iterator through [`FastaReader::records`].

pub mod lines;

use crate::error::FastaError;
use crate::record::Record;
use lines::LineReader;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

/// First byte of every header line.
pub const MARKER: u8 = b'>';

pub struct FastaReader<R> {
    lines: LineReader<R>,
    line: Vec<u8>,
    header: Vec<u8>,
    sequence: Vec<u8>,
    seen_header: bool,
    exhausted: bool,
    record: Option<Record>,
    err: Option<FastaError>,
}

impl FastaReader<File> {
    /// Opens the file at `path`. Nothing is read until the first call to `advance`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FastaError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FastaError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> FastaReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: LineReader::new(source),
            line: Vec::new(),
            header: Vec::new(),
            sequence: Vec::new(),
            seen_header: false,
            exhausted: false,
            record: None,
            err: None,
        }
    }

    /// Reads until the next record is complete.
    ///
    /// Returns `true` when a new record is available through [`record`](Self::record). Returns
    /// `false` once the input is used up or a read has failed; [`error`](Self::error) tells
    /// the two apart. Every call after the first `false` also returns `false`.
    pub fn advance(&mut self) -> bool {
        if self.exhausted || self.err.is_some() {
            return false;
        }

        loop {
            match self.lines.read_line_trim_newline(&mut self.line) {
                Ok(0) => return self.finish(),
                Ok(_) => {}
                Err(source) => {
                    let line = self.lines.line_number() + 1;
                    warn!("read failed at line {line}: {source}");

                    // a failure mid-record drops whatever was accumulated
                    self.header.clear();
                    self.sequence.clear();
                    self.err = Some(FastaError::Read { line, source });
                    return false;
                }
            }

            if self.line.first() == Some(&MARKER) {
                let next_header = self.line[1..].to_vec();
                if !self.seen_header {
                    self.header = next_header;
                    self.seen_header = true;
                } else {
                    self.emit(next_header);
                    return true;
                }
            } else {
                self.sequence.extend_from_slice(&self.line);
            }
        }
    }

    /// The most recently completed record, or `None` if no record has been completed yet.
    ///
    /// Once `advance` has returned `false` this keeps returning the last record it produced.
    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }

    /// The read failure that stopped iteration, if any. Reaching the end of the input is not
    /// an error.
    pub fn error(&self) -> Option<&FastaError> {
        self.err.as_ref()
    }

    /// Takes ownership of the stored read failure. The reader still refuses to advance.
    pub fn take_error(&mut self) -> Option<FastaError> {
        let err = self.err.take();
        if err.is_some() {
            self.exhausted = true;
        }
        err
    }

    /// Hands the byte source back to the caller.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }

    pub fn records(self) -> Records<R> {
        Records {
            reader: self,
            done: false,
        }
    }

    /// End of input: flush the pending record, unless the input held no header and no
    /// sequence bytes at all.
    fn finish(&mut self) -> bool {
        self.exhausted = true;
        debug!("input exhausted after {} lines", self.lines.line_number());

        if !self.seen_header && self.sequence.is_empty() {
            return false;
        }
        self.emit(Vec::new());
        true
    }

    /// Packages the pending header and sequence into a record and makes `next_header` the
    /// pending header.
    fn emit(&mut self, next_header: Vec<u8>) {
        let identifier = std::mem::replace(&mut self.header, next_header);
        let sequence = std::mem::take(&mut self.sequence);
        trace!(
            "record {} ({} bases)",
            String::from_utf8_lossy(&identifier),
            sequence.len()
        );
        self.record = Some(Record::new(identifier, sequence));
    }
}

/// Iterator over the records of a [`FastaReader`].
///
/// Yields each record by value. If a read fails the error is yielded once, after which the
/// iterator is finished.
pub struct Records<R> {
    reader: FastaReader<R>,
    done: bool,
}

impl<R: Read> Records<R> {
    pub fn into_reader(self) -> FastaReader<R> {
        self.reader
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.reader.advance() {
            if let Some(rec) = self.reader.record.take() {
                return Some(Ok(rec));
            }
        }

        self.done = true;
        self.reader.take_error().map(Err)
    }
}

impl<R: Read> FusedIterator for Records<R> {}
