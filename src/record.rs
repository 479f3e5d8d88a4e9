/// One FASTA entry: the header text and its concatenated sequence.
///
/// Records are only ever handed out once they are complete, so both fields are read-only.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Record {
    identifier: Vec<u8>,
    sequence: Vec<u8>,
}

impl Record {
    pub fn new(identifier: Vec<u8>, sequence: Vec<u8>) -> Self {
        Self {
            identifier,
            sequence,
        }
    }

    /// The header line without the leading `>` and without its line terminator. Any
    /// description text after the first word is kept as-is.
    pub fn identifier(&self) -> &[u8] {
        &self.identifier
    }

    /// Every body line between this header and the next one, joined with no separator.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.identifier, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn accessors() {
        let rec = Record::new(b"id1 desc".to_vec(), b"AAAACCCC".to_vec());
        assert_eq!(rec.identifier(), b"id1 desc");
        assert_eq!(rec.sequence(), b"AAAACCCC");
        assert_eq!(rec.len(), 8);
        assert!(!rec.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let rec = Record::default();
        assert!(rec.identifier().is_empty());
        assert!(rec.is_empty());
    }

    #[test]
    fn into_parts() {
        let (id, seq) = Record::new(b"x".to_vec(), b"GG".to_vec()).into_parts();
        assert_eq!(id, b"x");
        assert_eq!(seq, b"GG");
    }
}
