//! Genome sequence access for amino-acid derivation.

use std::collections::HashMap;
use std::io::Read;

use crate::error::Error;
use crate::fasta;

/// Supplies raw bases for a half-open genomic range.
///
/// An absent result means the range is not currently resolvable (unknown
/// chromosome, range past the sequence end); callers retry once the data
/// is available rather than treating it as an error.
pub trait SequenceSource {
    fn sequence(&self, chromosome: &str, start: i32, end: i32) -> Option<Vec<u8>>;
}

/// In-memory genome sequence dictionary indexed by chromosome name.
pub struct GenomeSequences {
    sequences: HashMap<String, Vec<u8>>,
}

impl GenomeSequences {
    /// Build from a gzip-compressed genome FASTA file.
    pub fn from_gz<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_entries(fasta::parse_fasta_gz(reader)?)
    }

    /// Build from already-parsed `(chromosome, bases)` pairs.
    pub fn from_entries(entries: Vec<(String, Vec<u8>)>) -> Result<Self, Error> {
        let mut sequences = HashMap::with_capacity(entries.len());
        for (name, seq) in entries {
            if sequences.contains_key(&name) {
                return Err(Error::Validation(format!(
                    "duplicate chromosome in genome FASTA: {name}"
                )));
            }
            sequences.insert(name, seq);
        }
        Ok(Self { sequences })
    }

    /// Get a full chromosome sequence by name.
    #[must_use]
    pub fn get(&self, chromosome: &str) -> Option<&[u8]> {
        self.sequences.get(chromosome).map(|v| v.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl SequenceSource for GenomeSequences {
    fn sequence(&self, chromosome: &str, start: i32, end: i32) -> Option<Vec<u8>> {
        if start < 0 || end < start {
            return None;
        }
        let seq = self.sequences.get(chromosome)?;
        let (start, end) = (start as usize, end as usize);
        if end > seq.len() {
            return None;
        }
        Some(seq[start..end].to_vec())
    }
}
