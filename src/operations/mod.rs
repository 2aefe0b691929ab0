//! Pure per-sequence transformations
//!
//! The three central-dogma stages, each a stateless function over borrowed
//! bytes:
//!
//! - `stats`: length, per-base counts, GC content
//! - `transcription`: DNA → RNA (T → U)
//! - `translation`: RNA → protein via the standard codon table
//!
//! All three are independent; records can be processed in any order (or in
//! parallel by a caller) with no shared mutable state. The codon table is the
//! only process-wide resource and is read-only after first use.

pub mod stats;
pub mod transcription;
pub mod translation;

pub use stats::{analyze, SequenceStats};
pub use transcription::{transcribe, transcribe_inplace};
pub use translation::{translate, UNKNOWN_RESIDUE};
