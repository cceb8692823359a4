//! Strand-oriented amino-acid sequence derivation.

use crate::codon::CodonTable;
use crate::strand::Strand;

/// An amino-acid run anchored at a genomic coordinate.
///
/// `start` is the genomic coordinate of the first base of the translation
/// window. Symbols are stored in translation order: on the forward strand
/// that follows increasing genomic coordinates, on the reverse strand it
/// runs from the genomic end of the window back toward `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AminoAcidSequence {
    pub start: i32,
    pub strand: Strand,
    pub amino_acids: Vec<u8>,
}

impl AminoAcidSequence {
    #[must_use]
    pub fn len(&self) -> usize {
        self.amino_acids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amino_acids.is_empty()
    }
}

fn complement(b: u8) -> u8 {
    match b {
        b'A' | b'a' => b'T',
        b'C' | b'c' => b'G',
        b'G' | b'g' => b'C',
        b'T' | b't' | b'U' | b'u' => b'A',
        _ => b'N',
    }
}

/// Reverse complement of a base sequence. Unrecognized bases become `N`.
#[must_use]
pub fn reverse_complement(bases: &[u8]) -> Vec<u8> {
    bases.iter().rev().map(|&b| complement(b)).collect()
}

/// Translate a window of raw bases anchored at genomic coordinate `start`,
/// oriented by strand.
///
/// Only complete codons are translated; a trailing partial codon is dropped.
/// Returns `None` on `Strand::Unknown` since there is no orientation to
/// translate in.
#[must_use]
pub fn amino_acid_sequence(
    bases: &[u8],
    start: i32,
    strand: Strand,
    table: &CodonTable,
) -> Option<AminoAcidSequence> {
    let oriented;
    let window: &[u8] = match strand {
        Strand::Forward => bases,
        Strand::Reverse => {
            oriented = reverse_complement(bases);
            &oriented
        }
        Strand::Unknown => return None,
    };

    let mut amino_acids = Vec::with_capacity(window.len() / 3);
    for codon in window.chunks_exact(3) {
        amino_acids.push(table.translate_codon(codon));
    }

    Some(AminoAcidSequence {
        start,
        strand,
        amino_acids,
    })
}
