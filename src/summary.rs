use crate::error::FastaError;
use crate::reader::FastaReader;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Whole-file statistics gathered in a single streaming pass.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct FastaSummary {
    pub seqio_version: String,
    pub file_path: String,
    pub record_count: usize,
    pub empty_records: usize,
    pub total_bases: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub avg_len: f64,
}

impl FastaSummary {
    /// Drains `reader` and summarises every record it yields.
    ///
    /// # Errors
    ///
    /// Returns the reader's read failure if it stopped early. Nothing is summarised in that
    /// case.
    pub fn from_reader<R: Read>(
        reader: &mut FastaReader<R>,
        file_path: &str,
    ) -> Result<Self, FastaError> {
        let mut summary = FastaSummary {
            seqio_version: env!("CARGO_PKG_VERSION").to_string(),
            file_path: file_path.to_string(),
            min_len: usize::MAX,
            ..FastaSummary::default()
        };

        while reader.advance() {
            if let Some(rec) = reader.record() {
                summary.add(rec.len());
            }
        }
        if let Some(err) = reader.take_error() {
            return Err(err);
        }

        if summary.record_count == 0 {
            summary.min_len = 0;
        } else {
            summary.avg_len = summary.total_bases as f64 / summary.record_count as f64;
        }
        Ok(summary)
    }

    fn add(&mut self, len: usize) {
        self.record_count += 1;
        self.total_bases += len;
        self.min_len = self.min_len.min(len);
        self.max_len = self.max_len.max(len);
        if len == 0 {
            self.empty_records += 1;
        }
    }
}
