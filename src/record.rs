//! Parsed sequence records.
//!
//! A [`RecordSet`] maps identifiers to [`SequenceRecord`]s and remembers the
//! order in which identifiers were first seen, so every report built from it
//! lists sequences in input order.

use bytes::Bytes;
use indexmap::IndexMap;
use rayon::prelude::*;

/// A single FASTA record: identifier plus concatenated bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    id: String,
    bases: Bytes,
}

impl SequenceRecord {
    /// Creates a record from an identifier and its bases.
    pub fn new(id: impl Into<String>, bases: impl Into<Bytes>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
        }
    }

    /// The first whitespace-delimited token of the header.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The sequence bases, exactly as read (no case folding).
    pub const fn bases(&self) -> &Bytes {
        &self.bases
    }

    /// Sequence length in bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Returns `true` for a header with no sequence lines.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// Records keyed by identifier, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: IndexMap<String, SequenceRecord>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the one it replaced.
    ///
    /// A replaced record keeps its original position.
    pub fn insert(&mut self, record: SequenceRecord) -> Option<SequenceRecord> {
        self.records.insert(record.id.clone(), record)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no header was parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.records.get(id)
    }

    /// Returns `true` if a record with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> + '_ {
        self.records.values()
    }

    /// Iterates records in parallel.
    ///
    /// `collect` on the returned iterator preserves insertion order.
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = &SequenceRecord> + '_ {
        self.records.par_values()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<SequenceRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SequenceRecord;
    type IntoIter = indexmap::map::Values<'a, String, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
