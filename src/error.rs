//! Error types for seqdogma

use thiserror::Error;

/// Result type alias for seqdogma operations
pub type Result<T> = std::result::Result<T, DogmaError>;

/// Error types that can occur in seqdogma
///
/// Transcription and translation are lenient by contract (unknown bases pass
/// through, unknown codons become `X`), so the pipeline's only failure modes
/// are I/O and malformed input files.
#[derive(Debug, Error)]
pub enum DogmaError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid FASTA format
    #[error("Invalid FASTA format at line {line}: {msg}")]
    InvalidFastaFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },
}
