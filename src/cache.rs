//! Bounded FIFO cache of per-position annotation descriptions.

use std::collections::VecDeque;

/// Minimum enforced cache capacity, in entries.
pub const MIN_CAPACITY: usize = 10;

/// One cached observation: a genomic point, its numeric value, and the raw
/// description line it came from.
#[derive(Debug, Clone, PartialEq)]
struct CacheEntry {
    chromosome: String,
    position: i32,
    value: f32,
    description: String,
}

/// Capacity-bounded store of `(chromosome, position, value) -> description`
/// mappings, evicting oldest-first.
///
/// Intended for single-threaded streaming ingest: descriptions are appended
/// as annotation records are parsed, and later looked up to avoid re-deriving
/// a description already seen. Lookup is a linear scan from the oldest entry;
/// capacity is small relative to the dataset, so the scan is bounded and the
/// structure stays allocation-light.
///
/// A single `VecDeque` of entry records keeps the key fields and the
/// description in lockstep, so eviction can never leave them out of sync.
#[derive(Debug)]
pub struct DescriptionCache {
    capacity: usize,
    entries: VecDeque<CacheEntry>,
    /// Shared schema naming each whitespace-delimited field of a description.
    header_tokens: Vec<String>,
}

impl DescriptionCache {
    /// Create a cache holding at most `capacity` entries. Capacities below
    /// [`MIN_CAPACITY`] are clamped up to it.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(MIN_CAPACITY),
            entries: VecDeque::new(),
            header_tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, clamping below [`MIN_CAPACITY`]. Shrinking does
    /// not evict immediately; excess entries drain on subsequent `add` calls.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(MIN_CAPACITY);
    }

    #[must_use]
    pub fn header_tokens(&self) -> &[String] {
        &self.header_tokens
    }

    /// Replace the header schema wholesale.
    pub fn set_header_tokens(&mut self, tokens: Vec<String>) {
        self.header_tokens = tokens;
    }

    /// Replace the header schema by tokenizing a whitespace-delimited header
    /// line.
    pub fn set_header_line(&mut self, header: &str) {
        self.header_tokens = header
            .trim()
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all entries. Capacity and header schema are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an entry, evicting the oldest first when at capacity.
    ///
    /// The return value reports append success for observability; with a
    /// growable deque it is always `true`.
    pub fn add(
        &mut self,
        chromosome: impl Into<String>,
        position: i32,
        value: f32,
        description: impl Into<String>,
    ) -> bool {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CacheEntry {
            chromosome: chromosome.into(),
            position,
            value,
            description: description.into(),
        });
        true
    }

    /// Find the description stored for an exact `(chromosome, position,
    /// value)` key, scanning oldest to newest. The value comparison is IEEE
    /// equality with no tolerance.
    #[must_use]
    pub fn lookup(&self, chromosome: &str, position: i32, value: f32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.chromosome == chromosome && e.position == position && e.value == value)
            .map(|e| e.description.as_str())
    }

    /// Resolve a description and render it against the header schema, one
    /// `header: field` pair per line.
    ///
    /// Header slots with no matching field in the tokenized description are
    /// skipped silently.
    #[must_use]
    pub fn formatted_description(
        &self,
        chromosome: &str,
        position: i32,
        value: f32,
    ) -> Option<String> {
        let description = self.lookup(chromosome, position, value)?;

        let mut lines = Vec::with_capacity(self.header_tokens.len());
        for (header, field) in self.header_tokens.iter().zip(description.split_whitespace()) {
            lines.push(format!("{header}: {field}"));
        }
        Some(lines.join("\n"))
    }
}
