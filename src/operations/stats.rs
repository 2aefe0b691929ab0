//! Per-sequence descriptive statistics
//!
//! Length, per-byte counts and GC content for one sequence. Pure computation:
//! no I/O, no alphabet validation. Bytes outside {A,C,G,T} still count toward
//! `length` and appear in `base_counts`; only `G` and `C` feed the GC
//! numerator.

use std::collections::BTreeMap;

/// Descriptive statistics for one sequence
///
/// Derived transiently from a record's sequence; recomputed on demand, never
/// cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStats {
    /// Total number of bytes in the sequence (counts every byte)
    pub length: usize,
    /// Occurrences of each distinct byte, exactly as it appears
    pub base_counts: BTreeMap<u8, u64>,
    /// GC content as a percentage (0.0 to 100.0); exactly 0.0 for an empty
    /// sequence
    pub gc_percent: f64,
}

/// Compute descriptive statistics for a sequence
///
/// `gc_percent` is 100 × (count('G') + count('C')) / length, with an explicit
/// guard: an empty sequence yields 0.0 rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use seqdogma::operations::analyze;
///
/// let stats = analyze(b"GCGC");
/// assert_eq!(stats.length, 4);
/// assert_eq!(stats.gc_percent, 100.0);
///
/// let empty = analyze(b"");
/// assert_eq!(empty.length, 0);
/// assert_eq!(empty.gc_percent, 0.0);
/// ```
pub fn analyze(seq: &[u8]) -> SequenceStats {
    let mut base_counts = BTreeMap::new();
    for &base in seq {
        *base_counts.entry(base).or_insert(0u64) += 1;
    }

    let gc_count = base_counts.get(&b'G').copied().unwrap_or(0)
        + base_counts.get(&b'C').copied().unwrap_or(0);

    let gc_percent = if seq.is_empty() {
        0.0
    } else {
        (gc_count as f64 / seq.len() as f64) * 100.0
    };

    SequenceStats {
        length: seq.len(),
        base_counts,
        gc_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_basic() {
        let stats = analyze(b"GATTACA"); // 2 GC out of 7
        assert_eq!(stats.length, 7);
        assert!((stats.gc_percent - 28.5714).abs() < 0.001);
        assert_eq!(stats.base_counts[&b'A'], 3);
        assert_eq!(stats.base_counts[&b'T'], 2);
        assert_eq!(stats.base_counts[&b'G'], 1);
        assert_eq!(stats.base_counts[&b'C'], 1);
    }

    #[test]
    fn test_analyze_all_gc() {
        let stats = analyze(b"GCGC");
        assert_eq!(stats.length, 4);
        assert_eq!(stats.gc_percent, 100.0);
    }

    #[test]
    fn test_analyze_empty() {
        let stats = analyze(b"");
        assert_eq!(stats.length, 0);
        assert_eq!(stats.gc_percent, 0.0);
        assert!(stats.base_counts.is_empty());
    }

    #[test]
    fn test_analyze_no_gc() {
        let stats = analyze(b"ATATATA");
        assert_eq!(stats.gc_percent, 0.0);
    }

    #[test]
    fn test_analyze_counts_unknown_bases() {
        // N counts toward length and base_counts but not the GC numerator
        let stats = analyze(b"GCNN");
        assert_eq!(stats.length, 4);
        assert_eq!(stats.base_counts[&b'N'], 2);
        assert_eq!(stats.gc_percent, 50.0);
    }

    #[test]
    fn test_analyze_case_sensitive() {
        // No case normalization: lowercase g/c are distinct bytes and do not
        // feed the GC numerator
        let stats = analyze(b"gcGC");
        assert_eq!(stats.base_counts[&b'g'], 1);
        assert_eq!(stats.base_counts[&b'G'], 1);
        assert_eq!(stats.gc_percent, 50.0);
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Counts always sum to the sequence length
        #[test]
        fn test_counts_sum_to_length(seq in proptest::collection::vec(any::<u8>(), 0..500)) {
            let stats = analyze(&seq);
            let total: u64 = stats.base_counts.values().sum();
            prop_assert_eq!(total, seq.len() as u64);
            prop_assert_eq!(stats.length, seq.len());
        }

        /// GC percent is always within [0, 100]
        #[test]
        fn test_gc_percent_bounded(seq in "[ACGTN]{0,500}") {
            let stats = analyze(seq.as_bytes());
            prop_assert!(stats.gc_percent >= 0.0);
            prop_assert!(stats.gc_percent <= 100.0);
        }
    }
}
