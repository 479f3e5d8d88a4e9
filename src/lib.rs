//! Incremental reader for FASTA files.
//!
//! ```
//! use seqio::FastaReader;
//!
//! let mut reader = FastaReader::new(&b">id1 desc\nAAAA\nCCCC\n>id2\nGGGG\n"[..]);
//! while reader.advance() {
//!     let rec = reader.record().unwrap();
//!     println!("{}: {} bp", String::from_utf8_lossy(rec.identifier()), rec.len());
//! }
//! assert!(reader.error().is_none());
//! ```

pub mod error;
pub mod io;
pub mod reader;
pub mod record;
pub mod summary;

pub use error::FastaError;
pub use reader::{FastaReader, Records};
pub use record::Record;
pub use summary::FastaSummary;
