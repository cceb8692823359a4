//! Feature sub-intervals (exons) and genomic to amino-acid coordinate math.

use std::sync::Arc;

use crate::codon::CodonTable;
use crate::error::Error;
use crate::sequence::SequenceSource;
use crate::strand::Strand;
use crate::translate::{self, AminoAcidSequence};

/// A sub-region of a genomic feature, e.g. a gene exon.
///
/// The interval `[start, end)` is half-open, 0-based, and immutable after
/// construction. The coding sub-interval defaults to the whole interval and
/// is kept clamped so `start <= coding_start <= coding_end <= end` after
/// every mutation.
///
/// The derived amino-acid sequence is memoized; every mutator that changes
/// the effective coding region routes through `invalidate_amino_acids`.
/// `Clone` yields an independently mutable interval that shares the
/// already-memoized sequence.
#[derive(Debug, Clone)]
pub struct FeatureInterval {
    chromosome: String,
    start: i32,
    end: i32,
    strand: Strand,
    coding_start: i32,
    coding_end: i32,
    utr: bool,
    reading_frame: Option<u8>,
    mrna_base: Option<i32>,
    /// 1-based ordinal among the transcript's coding intervals; 0 = unset.
    number: u32,
    amino_acids: Option<Arc<AminoAcidSequence>>,
}

impl FeatureInterval {
    #[must_use]
    pub fn new(chromosome: impl Into<String>, start: i32, end: i32, strand: Strand) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
            strand,
            // By default the entire interval is coding
            coding_start: start,
            coding_end: end,
            utr: false,
            reading_frame: None,
            mrna_base: None,
            number: 0,
            amino_acids: None,
        }
    }

    #[must_use]
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    #[must_use]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    #[must_use]
    pub fn coding_start(&self) -> i32 {
        self.coding_start
    }

    #[must_use]
    pub fn coding_end(&self) -> i32 {
        self.coding_end
    }

    #[must_use]
    pub fn reading_frame(&self) -> Option<u8> {
        self.reading_frame
    }

    #[must_use]
    pub fn mrna_base(&self) -> Option<i32> {
        self.mrna_base
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Set the 1-based ordinal of this interval among the transcript's
    /// coding intervals.
    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    /// Offset of this interval's first translated base relative to the start
    /// of the spliced transcript. Supplied by transcript assembly.
    pub fn set_mrna_base(&mut self, base: i32) {
        self.mrna_base = Some(base);
    }

    /// Flag the entire interval as untranslated.
    ///
    /// Setting the flag collapses the coding bounds to the boundary nearest
    /// the 3' end: `end` on the forward strand, `start` otherwise.
    pub fn set_utr(&mut self, utr: bool) {
        self.utr = utr;
        if utr {
            let boundary = match self.strand {
                Strand::Forward => self.end,
                Strand::Reverse | Strand::Unknown => self.start,
            };
            self.coding_start = boundary;
            self.coding_end = boundary;
        }
        self.invalidate_amino_acids();
    }

    #[must_use]
    pub fn is_utr(&self) -> bool {
        self.utr
    }

    /// True if the interval is wholly untranslated, or if `position` falls
    /// outside the coding bounds.
    #[must_use]
    pub fn is_utr_at(&self, position: i32) -> bool {
        self.utr || position < self.coding_start || position > self.coding_end
    }

    /// Leftmost position of the coding region (not necessarily the 5' end).
    /// Clamped into the interval; `coding_end` is raised if the new start
    /// passes it.
    pub fn set_coding_start(&mut self, coding_start: i32) {
        self.coding_start = coding_start.clamp(self.start, self.end);
        if self.coding_end < self.coding_start {
            self.coding_end = self.coding_start;
        }
        self.invalidate_amino_acids();
    }

    /// Rightmost position of the coding region. Clamped into the interval;
    /// `coding_start` is lowered if the new end passes it.
    pub fn set_coding_end(&mut self, coding_end: i32) {
        self.coding_end = coding_end.clamp(self.start, self.end);
        if self.coding_start > self.coding_end {
            self.coding_start = self.coding_end;
        }
        self.invalidate_amino_acids();
    }

    /// Assign the reading-frame offset directly.
    pub fn set_reading_frame(&mut self, offset: u8) {
        self.reading_frame = Some(offset);
    }

    /// Derive the reading-frame offset from an annotation phase (0, 1 or 2).
    ///
    /// On the forward strand the phase is the offset. On the reverse strand
    /// the first translated base sits at the genomic 3' end, so the offset is
    /// `(coding_length() - phase) mod 3`. Unknown strand leaves the frame
    /// unset.
    pub fn set_phase(&mut self, phase: u8) {
        match self.strand {
            Strand::Forward => self.reading_frame = Some(phase),
            Strand::Reverse => {
                let offset = (self.coding_length() - i32::from(phase)).rem_euclid(3);
                self.reading_frame = Some(offset as u8);
            }
            Strand::Unknown => {}
        }
    }

    /// Length of the coding region; zero when the interval is UTR.
    #[must_use]
    pub fn coding_length(&self) -> i32 {
        if self.utr {
            0
        } else {
            (self.coding_end - self.coding_start).max(0)
        }
    }

    /// 1-based codon index of a genomic coordinate within the transcript.
    ///
    /// Returns `-1` when no transcript context is available (`mrna_base`
    /// unset, or the position precedes the first translated base) and `0`
    /// on an unknown strand. Coordinates outside `[start, end]` are an
    /// error.
    pub fn amino_acid_index(&self, genome_coordinate: i32) -> Result<i32, Error> {
        if genome_coordinate < self.start || genome_coordinate > self.end {
            return Err(Error::CoordinateOutOfRange {
                position: genome_coordinate,
                start: self.start,
                end: self.end,
            });
        }
        let Some(mrna_base) = self.mrna_base else {
            return Ok(-1);
        };
        let mrna_coord = match self.strand {
            Strand::Forward => mrna_base + (genome_coordinate - self.coding_start) - 1,
            Strand::Reverse => mrna_base + (self.coding_end - genome_coordinate),
            Strand::Unknown => return Ok(0),
        };
        if mrna_coord < 0 {
            Ok(-1)
        } else {
            Ok(mrna_coord / 3 + 1)
        }
    }

    /// The translated amino-acid sequence for this interval's coding region,
    /// memoized across calls.
    ///
    /// Returns `None` when the interval is UTR, the reading frame is unset,
    /// the coding window holds no full codon, or the source cannot supply
    /// the bases yet. A `None` is not memoized; the next call retries.
    pub fn amino_acid_sequence(
        &mut self,
        source: &dyn SequenceSource,
        table: &CodonTable,
    ) -> Option<Arc<AminoAcidSequence>> {
        if self.amino_acids.is_none() {
            self.compute_amino_acid_sequence(source, table);
        }
        self.amino_acids.clone()
    }

    fn compute_amino_acid_sequence(&mut self, source: &dyn SequenceSource, table: &CodonTable) {
        if self.utr {
            return;
        }
        let Some(frame) = self.reading_frame else {
            return;
        };
        let read_start = if self.coding_start > self.start {
            self.coding_start
        } else {
            self.start + i32::from(frame)
        };
        let read_end = self.end.min(self.coding_end);
        if read_end > read_start + 3 {
            if let Some(bases) = source.sequence(&self.chromosome, read_start, read_end) {
                self.amino_acids =
                    translate::amino_acid_sequence(&bases, read_start, self.strand, table)
                        .map(Arc::new);
            }
        }
    }

    fn invalidate_amino_acids(&mut self) {
        self.amino_acids = None;
    }

    /// Locus in 1-based display form, e.g. `chr1:1001-1300`.
    #[must_use]
    pub fn locus_string(&self) -> String {
        format!("{}:{}-{}", self.chromosome, self.start + 1, self.end)
    }

    /// Multi-line summary for a position inside the interval: ordinal,
    /// amino-acid number when known, and the locus.
    #[must_use]
    pub fn value_string(&self, position: i32) -> String {
        let mut msg = String::new();
        if self.number > 0 {
            msg.push_str(&format!("Exon number: {}", self.number));
        }
        if let Ok(aa_number) = self.amino_acid_index(position) {
            if aa_number > 0 {
                if !msg.is_empty() {
                    msg.push('\n');
                }
                msg.push_str(&format!("Amino acid number: {aa_number}"));
            }
        }
        if !msg.is_empty() {
            msg.push('\n');
        }
        msg.push_str(&self.locus_string());
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::GenomeSequences;

    fn genome(chromosome: &str, bases: &[u8]) -> GenomeSequences {
        GenomeSequences::from_entries(vec![(chromosome.to_string(), bases.to_vec())]).unwrap()
    }

    /// A source with nothing in it; every query comes back empty.
    fn empty_genome() -> GenomeSequences {
        GenomeSequences::from_entries(Vec::new()).unwrap()
    }

    #[test]
    fn construction_defaults() {
        let interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        assert_eq!(interval.coding_start(), 1000);
        assert_eq!(interval.coding_end(), 1300);
        assert_eq!(interval.coding_length(), 300);
        assert!(!interval.is_utr());
        assert!(interval.reading_frame().is_none());
        assert!(interval.mrna_base().is_none());
    }

    #[test]
    fn coding_bounds_clamped() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_coding_start(500);
        assert_eq!(interval.coding_start(), 1000);
        interval.set_coding_end(9999);
        assert_eq!(interval.coding_end(), 1300);
        interval.set_coding_start(2000);
        assert_eq!(interval.coding_start(), 1300);
    }

    #[test]
    fn coding_bounds_stay_ordered() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_coding_end(1100);
        interval.set_coding_start(1200);
        assert!(interval.coding_start() <= interval.coding_end());
        assert_eq!(interval.coding_start(), 1200);
        assert_eq!(interval.coding_end(), 1200);

        interval.set_coding_end(1050);
        assert_eq!(interval.coding_start(), 1050);
        assert_eq!(interval.coding_end(), 1050);
        assert!(1000 <= interval.coding_start() && interval.coding_end() <= 1300);
    }

    #[test]
    fn utr_collapse_forward() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_utr(true);
        assert_eq!(interval.coding_start(), 1300);
        assert_eq!(interval.coding_end(), 1300);
        assert_eq!(interval.coding_length(), 0);
        for position in [1000, 1150, 1300] {
            assert!(interval.is_utr_at(position));
        }
    }

    #[test]
    fn utr_collapse_reverse() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Reverse);
        interval.set_utr(true);
        assert_eq!(interval.coding_start(), 1000);
        assert_eq!(interval.coding_end(), 1000);
        assert_eq!(interval.coding_length(), 0);
    }

    #[test]
    fn is_utr_at_outside_coding_bounds() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_coding_start(1100);
        interval.set_coding_end(1200);
        assert!(interval.is_utr_at(1050));
        assert!(!interval.is_utr_at(1100));
        assert!(!interval.is_utr_at(1200));
        assert!(interval.is_utr_at(1250));
    }

    #[test]
    fn phase_forward() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_phase(2);
        assert_eq!(interval.reading_frame(), Some(2));
    }

    #[test]
    fn phase_reverse() {
        let mut interval = FeatureInterval::new("chr1", 0, 10, Strand::Reverse);
        // coding length 10, phase 2: (10 - 2) mod 3 = 2
        interval.set_phase(2);
        assert_eq!(interval.reading_frame(), Some(2));
        // coding length 10, phase 1: (10 - 1) mod 3 = 0
        interval.set_phase(1);
        assert_eq!(interval.reading_frame(), Some(0));
    }

    #[test]
    fn phase_reverse_short_coding_region() {
        let mut interval = FeatureInterval::new("chr1", 0, 10, Strand::Reverse);
        interval.set_utr(true);
        // coding length 0, phase 2: mathematical mod keeps the offset in 0..3
        interval.set_phase(2);
        assert_eq!(interval.reading_frame(), Some(1));
    }

    #[test]
    fn phase_unknown_strand_is_noop() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Unknown);
        interval.set_phase(2);
        assert!(interval.reading_frame().is_none());
    }

    #[test]
    fn amino_acid_index_forward() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_mrna_base(0);
        // mrna_coord = 0 + (1003 - 1000) - 1 = 2 → 2/3 + 1 = 1
        assert_eq!(interval.amino_acid_index(1003).unwrap(), 1);
        // Index advances by one every three genomic bases
        for k in 0..10 {
            assert_eq!(interval.amino_acid_index(1001 + 3 * k).unwrap(), k + 1);
            assert_eq!(interval.amino_acid_index(1003 + 3 * k).unwrap(), k + 1);
        }
    }

    #[test]
    fn amino_acid_index_reverse() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Reverse);
        interval.set_mrna_base(0);
        // mrna_coord = 0 + (1300 - 1300) = 0 → 1
        assert_eq!(interval.amino_acid_index(1300).unwrap(), 1);
        assert_eq!(interval.amino_acid_index(1298).unwrap(), 1);
        // mrna_coord = 3 → 2
        assert_eq!(interval.amino_acid_index(1297).unwrap(), 2);
    }

    #[test]
    fn amino_acid_index_sentinels() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        // No transcript context yet
        assert_eq!(interval.amino_acid_index(1100).unwrap(), -1);

        interval.set_mrna_base(0);
        // First base of the coding region precedes the first full codon
        assert_eq!(interval.amino_acid_index(1000).unwrap(), -1);

        let mut unknown = FeatureInterval::new("chr1", 1000, 1300, Strand::Unknown);
        unknown.set_mrna_base(0);
        assert_eq!(unknown.amino_acid_index(1100).unwrap(), 0);
    }

    #[test]
    fn amino_acid_index_out_of_range() {
        let interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        assert!(matches!(
            interval.amino_acid_index(999),
            Err(Error::CoordinateOutOfRange { .. })
        ));
        assert!(interval.amino_acid_index(1301).is_err());
        assert!(interval.amino_acid_index(1300).is_ok());
    }

    #[test]
    fn sequence_computed_and_memoized() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);

        let first = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert_eq!(first.amino_acids, b"MAC*");
        assert_eq!(first.start, 0);

        // Second call returns the memoized value, not a recomputation
        let second = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn sequence_window_starts_at_coding_start() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);
        interval.set_coding_start(3);

        let seq = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert_eq!(seq.start, 3);
        assert_eq!(seq.amino_acids, b"AC*");
    }

    #[test]
    fn sequence_window_honors_reading_frame() {
        let genome = genome("chr1", b"CCATGGCATGC");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 11, Strand::Forward);
        // coding_start == start, so the window begins at start + frame
        interval.set_reading_frame(2);

        let seq = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert_eq!(seq.start, 2);
        assert_eq!(seq.amino_acids, b"MAC");
    }

    #[test]
    fn sequence_absent_without_frame_or_when_utr() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();

        let mut no_frame = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        assert!(no_frame.amino_acid_sequence(&genome, &table).is_none());

        let mut utr = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        utr.set_reading_frame(0);
        utr.set_utr(true);
        assert!(utr.amino_acid_sequence(&genome, &table).is_none());
    }

    #[test]
    fn sequence_window_too_short() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);
        interval.set_coding_end(3);
        assert!(interval.amino_acid_sequence(&genome, &table).is_none());
    }

    #[test]
    fn missing_sequence_retries_on_next_call() {
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);

        // Source has no chr1 yet; nothing is memoized
        assert!(interval.amino_acid_sequence(&empty_genome(), &table).is_none());

        // Once the data exists the same call succeeds
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let seq = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert_eq!(seq.amino_acids, b"MAC*");
    }

    #[test]
    fn mutators_invalidate_memoized_sequence() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);

        let first = interval.amino_acid_sequence(&genome, &table).unwrap();
        interval.set_coding_start(3);
        let second = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.amino_acids, b"AC*");

        interval.set_coding_end(9);
        let third = interval.amino_acid_sequence(&genome, &table).unwrap();
        assert!(!Arc::ptr_eq(&second, &third));

        // UTR toggling changes the effective coding length too
        interval.set_utr(true);
        assert!(interval.amino_acid_sequence(&genome, &table).is_none());
    }

    #[test]
    fn clone_shares_memoized_sequence() {
        let genome = genome("chr1", b"ATGGCATGCTAA");
        let table = CodonTable::standard();
        let mut interval = FeatureInterval::new("chr1", 0, 12, Strand::Forward);
        interval.set_reading_frame(0);
        let original = interval.amino_acid_sequence(&genome, &table).unwrap();

        let mut copy = interval.clone();
        assert_eq!(copy.coding_start(), interval.coding_start());
        assert_eq!(copy.coding_end(), interval.coding_end());
        let copied = copy.amino_acid_sequence(&genome, &table).unwrap();
        assert!(Arc::ptr_eq(&original, &copied));

        // The copy is independently mutable
        copy.set_coding_start(3);
        assert_eq!(interval.coding_start(), 0);
    }

    #[test]
    fn value_string_contents() {
        let mut interval = FeatureInterval::new("chr1", 1000, 1300, Strand::Forward);
        interval.set_number(4);
        interval.set_mrna_base(0);
        let msg = interval.value_string(1003);
        assert_eq!(msg, "Exon number: 4\nAmino acid number: 1\nchr1:1001-1300");
    }

    #[test]
    fn value_string_without_ordinal() {
        let interval = FeatureInterval::new("chr2", 10, 20, Strand::Reverse);
        assert_eq!(interval.value_string(15), "chr2:11-20");
    }
}
