//! I/O module: streaming FASTA input
//!
//! One record is resident at a time; the parser never materializes the whole
//! file. See [`fasta::FastaStream`] for the format contract.

pub mod fasta;

pub use fasta::FastaStream;
