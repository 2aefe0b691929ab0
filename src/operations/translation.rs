//! RNA to protein translation using the standard genetic code
//!
//! Translation reads non-overlapping 3-base codons from offset 0 (fixed
//! reading frame: no start-codon scanning, no alternate frames) and maps each
//! through the standard codon table.
//!
//! # Stop and fragment semantics
//!
//! - A stop codon terminates translation immediately; the stop marker is
//!   never emitted and any remaining input is ignored.
//! - A trailing 1-2 base fragment is discarded silently.
//!
//! # Policy for unknown codons
//!
//! A codon absent from the table (any codon containing a non-RNA byte) emits
//! the placeholder residue `X` rather than failing. Translation never errors.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Amino-acid placeholder emitted for codons outside the standard table
pub const UNKNOWN_RESIDUE: u8 = b'X';

/// Stop marker used inside the codon table; never appears in output
const STOP: u8 = b'*';

/// The standard genetic code: all 64 RNA codons
///
/// Stop codons (UAA, UAG, UGA) map to `*`.
const CODON_TABLE: [([u8; 3], u8); 64] = [
    // Phenylalanine (F) / Leucine (L)
    (*b"UUU", b'F'), (*b"UUC", b'F'), (*b"UUA", b'L'), (*b"UUG", b'L'),
    // Serine (S)
    (*b"UCU", b'S'), (*b"UCC", b'S'), (*b"UCA", b'S'), (*b"UCG", b'S'),
    // Tyrosine (Y) / stop
    (*b"UAU", b'Y'), (*b"UAC", b'Y'), (*b"UAA", STOP), (*b"UAG", STOP),
    // Cysteine (C) / stop / Tryptophan (W)
    (*b"UGU", b'C'), (*b"UGC", b'C'), (*b"UGA", STOP), (*b"UGG", b'W'),
    // Leucine (L)
    (*b"CUU", b'L'), (*b"CUC", b'L'), (*b"CUA", b'L'), (*b"CUG", b'L'),
    // Proline (P)
    (*b"CCU", b'P'), (*b"CCC", b'P'), (*b"CCA", b'P'), (*b"CCG", b'P'),
    // Histidine (H) / Glutamine (Q)
    (*b"CAU", b'H'), (*b"CAC", b'H'), (*b"CAA", b'Q'), (*b"CAG", b'Q'),
    // Arginine (R)
    (*b"CGU", b'R'), (*b"CGC", b'R'), (*b"CGA", b'R'), (*b"CGG", b'R'),
    // Isoleucine (I) / Methionine (M, start)
    (*b"AUU", b'I'), (*b"AUC", b'I'), (*b"AUA", b'I'), (*b"AUG", b'M'),
    // Threonine (T)
    (*b"ACU", b'T'), (*b"ACC", b'T'), (*b"ACA", b'T'), (*b"ACG", b'T'),
    // Asparagine (N) / Lysine (K)
    (*b"AAU", b'N'), (*b"AAC", b'N'), (*b"AAA", b'K'), (*b"AAG", b'K'),
    // Serine (S) / Arginine (R)
    (*b"AGU", b'S'), (*b"AGC", b'S'), (*b"AGA", b'R'), (*b"AGG", b'R'),
    // Valine (V)
    (*b"GUU", b'V'), (*b"GUC", b'V'), (*b"GUA", b'V'), (*b"GUG", b'V'),
    // Alanine (A)
    (*b"GCU", b'A'), (*b"GCC", b'A'), (*b"GCA", b'A'), (*b"GCG", b'A'),
    // Aspartate (D) / Glutamate (E)
    (*b"GAU", b'D'), (*b"GAC", b'D'), (*b"GAA", b'E'), (*b"GAG", b'E'),
    // Glycine (G)
    (*b"GGU", b'G'), (*b"GGC", b'G'), (*b"GGA", b'G'), (*b"GGG", b'G'),
];

/// Codon lookup map, built once per process and read-only thereafter
fn codon_map() -> &'static HashMap<[u8; 3], u8> {
    static MAP: OnceLock<HashMap<[u8; 3], u8>> = OnceLock::new();
    MAP.get_or_init(|| CODON_TABLE.iter().copied().collect())
}

/// Translate an RNA sequence to a protein sequence
///
/// Codons are read from offset 0 in a single fixed frame. A stop codon
/// terminates translation (the stop marker is never part of the output), an
/// unknown codon emits [`UNKNOWN_RESIDUE`], and a trailing fragment shorter
/// than a codon is discarded.
///
/// # Examples
///
/// ```
/// use seqdogma::operations::translate;
///
/// assert_eq!(translate(b"AUG"), b"M"); // Methionine
/// assert_eq!(translate(b"AUGUUUUAA"), b"MF"); // stop ends translation
/// assert_eq!(translate(b"AUGCC"), b"M"); // trailing CC discarded
/// ```
pub fn translate(rna: &[u8]) -> Vec<u8> {
    let table = codon_map();
    let mut protein = Vec::with_capacity(rna.len() / 3);

    for codon in rna.chunks_exact(3) {
        let key = [codon[0], codon[1], codon[2]];
        match table.get(&key).copied() {
            Some(STOP) => break,
            Some(residue) => protein.push(residue),
            None => protein.push(UNKNOWN_RESIDUE),
        }
    }

    protein
}
