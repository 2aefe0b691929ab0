//! Per-record pipeline orchestration
//!
//! Composes the central-dogma stages for each parsed record: statistics,
//! DNA → RNA transcription, RNA → protein translation. The stages are
//! independent pure functions; a failure while reading any record aborts the
//! whole run rather than skipping records silently.

use crate::error::Result;
use crate::io::FastaStream;
use crate::operations::{analyze, transcribe, translate};
use crate::types::FastaRecord;
use std::collections::BTreeMap;
use std::path::Path;

/// Complete analysis of one FASTA record
///
/// This is the unit handed to presentation code (report renderer, CLI
/// output); the core never reads it back.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAnalysis {
    /// Sequence identifier
    pub id: String,
    /// Free-text description from the header line
    pub description: String,
    /// Original DNA sequence
    pub sequence: Vec<u8>,
    /// Total base count (equals `sequence.len()`)
    pub length: usize,
    /// Occurrences of each distinct base
    pub base_counts: BTreeMap<u8, u64>,
    /// GC content percentage (0.0 for an empty sequence)
    pub gc_percent: f64,
    /// Transcribed RNA sequence (same length as `sequence`)
    pub rna: Vec<u8>,
    /// Translated protein sequence
    pub protein: Vec<u8>,
}

/// Analyze a single record: statistics, transcription, translation
///
/// Pure composition over the record's sequence; the record itself is only
/// borrowed.
///
/// # Examples
///
/// ```
/// use seqdogma::pipeline::analyze_record;
/// use seqdogma::FastaRecord;
///
/// let record = FastaRecord::new("seq1".to_string(), String::new(), b"ATGTAA".to_vec());
/// let analysis = analyze_record(&record);
/// assert_eq!(analysis.rna, b"AUGUAA");
/// assert_eq!(analysis.protein, b"M"); // UAA stops translation
/// ```
pub fn analyze_record(record: &FastaRecord) -> RecordAnalysis {
    let stats = analyze(&record.sequence);
    let rna = transcribe(&record.sequence);
    let protein = translate(&rna);

    RecordAnalysis {
        id: record.id.clone(),
        description: record.description.clone(),
        sequence: record.sequence.clone(),
        length: stats.length,
        base_counts: stats.base_counts,
        gc_percent: stats.gc_percent,
        rna,
        protein,
    }
}

/// Run the full pipeline over a FASTA file
///
/// Streams records in file order, analyzing each as it is parsed. The first
/// parse error aborts the run; there is no partial-record recovery.
///
/// # Example
///
/// ```no_run
/// use seqdogma::pipeline::run_pipeline;
///
/// let results = run_pipeline("genome.fa")?;
/// for analysis in &results {
///     println!("{}: {} bp, GC {:.2}%", analysis.id, analysis.length, analysis.gc_percent);
/// }
/// # Ok::<(), seqdogma::DogmaError>(())
/// ```
pub fn run_pipeline<P: AsRef<Path>>(path: P) -> Result<Vec<RecordAnalysis>> {
    let stream = FastaStream::from_path(path)?;
    let mut results = Vec::new();

    for record in stream {
        let record = record?;
        results.push(analyze_record(&record));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_record_composes_stages() {
        let record = FastaRecord::new(
            "seq1".to_string(),
            "test gene".to_string(),
            b"ATGGCT".to_vec(),
        );
        let analysis = analyze_record(&record);

        assert_eq!(analysis.id, "seq1");
        assert_eq!(analysis.description, "test gene");
        assert_eq!(analysis.length, 6);
        assert_eq!(analysis.rna, b"AUGGCU");
        assert_eq!(analysis.protein, b"MA");
    }

    #[test]
    fn test_analyze_record_empty_sequence() {
        let record = FastaRecord::new("empty".to_string(), String::new(), Vec::new());
        let analysis = analyze_record(&record);

        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.gc_percent, 0.0);
        assert!(analysis.rna.is_empty());
        assert!(analysis.protein.is_empty());
    }

    #[test]
    fn test_rna_length_matches_dna() {
        let record = FastaRecord::new("seq1".to_string(), String::new(), b"GATTACA".to_vec());
        let analysis = analyze_record(&record);
        assert_eq!(analysis.rna.len(), analysis.sequence.len());
    }
}
