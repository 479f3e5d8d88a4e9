use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaError {
    /// The byte source could not be established.
    #[error("unable to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O failure while scanning lines. End of input is never reported this way.
    #[error("read failed at line {line}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },
}
