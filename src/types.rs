//! Common types used throughout seqdogma

/// A FASTA record
///
/// Immutable once constructed; every downstream stage (statistics,
/// transcription, translation) borrows it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Sequence identifier (without '>' prefix, up to first whitespace)
    pub id: String,
    /// Free-text description (remainder of the header line, may be empty)
    pub description: String,
    /// DNA sequence bytes, exactly as read (no case normalization)
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Create a new FASTA record
    pub fn new(id: String, description: String, sequence: Vec<u8>) -> Self {
        Self { id, description, sequence }
    }

    /// Check if the record has an empty sequence
    ///
    /// A header line immediately followed by another header or EOF yields an
    /// empty sequence; this is valid input, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdogma::FastaRecord;
    ///
    /// let empty = FastaRecord::new("seq1".to_string(), String::new(), Vec::new());
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = FastaRecord::new("seq2".to_string(), String::new(), b"ACGT".to_vec());
    /// assert!(!non_empty.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
