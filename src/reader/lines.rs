use std::io::{BufRead, BufReader, Read};

/// Buffered line scanner over any byte source.
pub struct LineReader<R> {
    reader: BufReader<R>,
    lines: u64,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            lines: 0,
        }
    }

    /// Number of lines handed out so far.
    pub fn line_number(&self) -> u64 {
        self.lines
    }

    /// Reads the next line into `buf` with its terminator removed. `buf` is cleared first.
    ///
    /// Returns the number of bytes consumed from the source, terminator included, so `Ok(0)`
    /// means end of input. A final line without a terminator is still returned.
    pub fn read_line_trim_newline(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize> {
        buf.clear();
        let n = self.reader.read_until(b'\n', buf)?;
        if n > 0 {
            self.lines += 1;
            trim_newline(buf);
        }
        Ok(n)
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Strips one trailing `\n` or `\r\n`. A lone trailing `\r` (the last line of a CRLF file
/// with no final newline) is treated as a terminator too.
pub fn trim_newline(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}
