//! seqdogma: central-dogma sequence analysis pipeline
//!
//! # Overview
//!
//! seqdogma parses multi-record FASTA files and runs each record through the
//! molecular-biology central dogma: descriptive statistics, DNA → RNA
//! transcription, and RNA → protein translation with the standard genetic
//! code.
//!
//! ## Quick Start
//!
//! ```no_run
//! use seqdogma::FastaStream;
//! use seqdogma::operations::{analyze, transcribe, translate};
//!
//! # fn main() -> seqdogma::Result<()> {
//! // Stream FASTA records (one resident at a time)
//! let stream = FastaStream::from_path("genome.fa")?;
//!
//! for record in stream {
//!     let record = record?;
//!     let stats = analyze(&record.sequence);
//!     let rna = transcribe(&record.sequence);
//!     let protein = translate(&rna);
//!     println!("{}: {} bp, GC {:.2}%, {} aa",
//!         record.id, stats.length, stats.gc_percent, protein.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or run the whole pipeline in one call:
//!
//! ```no_run
//! # fn main() -> seqdogma::Result<()> {
//! let results = seqdogma::pipeline::run_pipeline("genome.fa")?;
//! print!("{}", seqdogma::report::render_text(&results));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`io`]: Streaming FASTA parser
//! - [`operations`]: Pure transformations (statistics, transcription,
//!   translation)
//! - [`pipeline`]: Per-record orchestration and the result structure
//! - [`report`]: Text/HTML rendering of pipeline results
//!
//! ## Contracts
//!
//! - Translation uses a single fixed reading frame from offset 0; no ORF
//!   scanning, no reverse-complement frames, standard codon table only.
//! - Non-canonical bases pass through transcription unchanged; unknown codons
//!   translate to the placeholder residue `X`. Neither stage fails.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod operations;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{DogmaError, Result};
pub use io::FastaStream;
pub use pipeline::RecordAnalysis;
pub use types::FastaRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
