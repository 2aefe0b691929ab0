//! DNA to RNA transcription
//!
//! Transcription replaces every thymine (`T`) with uracil (`U`) and leaves
//! every other byte unchanged, so output length always equals input length.
//!
//! # Policy for non-canonical bases
//!
//! Bytes outside {A,C,G,T} — IUPAC ambiguity codes, lowercase bases, anything
//! else — pass through unchanged. Transcription never fails. Callers that
//! need strict alphabets must validate upstream.

/// Transcribe a DNA sequence to RNA
///
/// Pure, deterministic, length-preserving: `T` becomes `U`, all other bytes
/// are copied verbatim. Lowercase `t` is a distinct byte and passes through
/// (no case normalization anywhere in the pipeline).
///
/// # Examples
///
/// ```
/// use seqdogma::operations::transcribe;
///
/// assert_eq!(transcribe(b"ATGC"), b"AUGC");
/// assert_eq!(transcribe(b""), b"");
/// assert_eq!(transcribe(b"ANT"), b"ANU"); // N passes through
/// ```
pub fn transcribe(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|&base| if base == b'T' { b'U' } else { base })
        .collect()
}

/// Transcribe a DNA sequence to RNA in place
///
/// Same mapping as [`transcribe`] without allocating a new buffer.
pub fn transcribe_inplace(seq: &mut [u8]) {
    for base in seq.iter_mut() {
        if *base == b'T' {
            *base = b'U';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_basic() {
        assert_eq!(transcribe(b"ATGC"), b"AUGC");
    }

    #[test]
    fn test_transcribe_all_t() {
        assert_eq!(transcribe(b"TTTT"), b"UUUU");
    }

    #[test]
    fn test_transcribe_no_t() {
        assert_eq!(transcribe(b"ACGACG"), b"ACGACG");
    }

    #[test]
    fn test_transcribe_empty() {
        assert_eq!(transcribe(b""), b"");
    }

    #[test]
    fn test_transcribe_passes_through_unknown() {
        assert_eq!(transcribe(b"ANRT"), b"ANRU");
    }

    #[test]
    fn test_transcribe_lowercase_untouched() {
        // Lowercase t is not canonical T; it passes through
        assert_eq!(transcribe(b"atgc"), b"atgc");
    }

    #[test]
    fn test_transcribe_inplace_matches() {
        let mut seq = b"GATTACA".to_vec();
        transcribe_inplace(&mut seq);
        assert_eq!(seq, transcribe(b"GATTACA"));
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Transcription is length-preserving and touches only T
        #[test]
        fn test_transcribe_length_and_mapping(seq in proptest::collection::vec(any::<u8>(), 0..500)) {
            let rna = transcribe(&seq);
            prop_assert_eq!(rna.len(), seq.len());
            for (&before, &after) in seq.iter().zip(rna.iter()) {
                if before == b'T' {
                    prop_assert_eq!(after, b'U');
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        /// Re-transcribing RNA output is a no-op (output contains no T)
        #[test]
        fn test_transcribe_idempotent_on_output(seq in "[ACGTN]{0,500}") {
            let rna = transcribe(seq.as_bytes());
            prop_assert_eq!(transcribe(&rna), rna);
        }
    }
}
