use crate::error::FastaError;
use crate::reader::FastaReader;
use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::Path;

/// A reader over whichever source the caller picked at runtime.
pub type GenericFastaReader = FastaReader<Box<dyn Read>>;

/// Opens `input` for reading, where `-` stands for standard input.
///
/// # Errors
///
/// Returns [`FastaError::Open`] if the file cannot be opened.
pub fn open_fasta(input: &str) -> Result<GenericFastaReader, FastaError> {
    if input == "-" {
        return Ok(FastaReader::new(Box::new(stdin()) as Box<dyn Read>));
    }

    let file = File::open(Path::new(input)).map_err(|source| FastaError::Open {
        path: input.into(),
        source,
    })?;
    Ok(FastaReader::new(Box::new(file) as Box<dyn Read>))
}

/// Creates a `BufWriter` for the given output option: the file at `output` if given,
/// otherwise standard output.
pub fn get_writer(output: &Option<String>) -> std::io::Result<impl Write> {
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))?;
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(stdout()) as Box<dyn Write>,
    });
    Ok(writer)
}

/// Utility function to extract the error from an iterator and stop iteration immediately.
/// Meant to be used with `scan` on an iterator of `Result`s.
///
/// # Example
/// ```
/// use seqio::io::until_err;
///
/// let mut err = Ok(());
/// let items = vec![Ok(1), Ok(2), Err("bad"), Ok(3)];
/// let results: Vec<_> = items.into_iter().scan(&mut err, until_err).collect();
/// assert_eq!(results, vec![1, 2]);
/// assert_eq!(err, Err("bad"));
/// ```
pub fn until_err<T, E>(err: &mut &mut Result<(), E>, item: Result<T, E>) -> Option<T> {
    match item {
        Ok(item) => Some(item),
        Err(e) => {
            **err = Err(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{open_fasta, until_err};
    use crate::error::FastaError;

    #[test]
    fn until_err_passes_everything_when_ok() {
        let mut err: Result<(), String> = Ok(());
        let v: Vec<i32> = vec![Ok(1), Ok(2)]
            .into_iter()
            .scan(&mut err, until_err)
            .collect();
        assert_eq!(v, vec![1, 2]);
        assert!(err.is_ok());
    }

    #[test]
    fn open_missing_file() {
        match open_fasta("definitely/not/here.fa") {
            Err(FastaError::Open { path, source }) => {
                assert_eq!(path.to_str(), Some("definitely/not/here.fa"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("file should not exist"),
        }
    }
}
