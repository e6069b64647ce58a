//! Overlapping k-mer repeat counting.
//!
//! Every sequence at least `k` bases long contributes all of its overlapping
//! windows of width `k` to one counter pooled across the whole record set.
//! Records are processed in parallel with [`rayon`], sharing a
//! [`DashMap`] keyed by the window bytes.

use std::{
    collections::{BTreeSet, HashMap},
    hash::BuildHasherDefault,
};

use bytes::Bytes;
use dashmap::DashMap;
use rayon::prelude::*;
use rustc_hash::FxHasher;
use serde::Serialize;

use crate::{
    kmer::{windows, KmerLength},
    record::RecordSet,
};

#[cfg(feature = "tracing")]
use tracing::{debug_span, info};

/// A custom `DashMap` w/ `FxHasher`.
type DashFx = DashMap<Bytes, u64, BuildHasherDefault<FxHasher>>;

/// Pooled k-mer counts and their mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatReport {
    k: usize,
    max_count: u64,
    most_frequent: BTreeSet<String>,
    total_windows: u64,
    distinct: usize,
    #[serde(skip)]
    counts: HashMap<String, u64>,
}

impl RepeatReport {
    fn from_counts(k: KmerLength, counts: HashMap<String, u64>) -> Self {
        let max_count = counts.values().copied().max().unwrap_or(0);
        let most_frequent = counts
            .iter()
            .filter(|&(_, &count)| count == max_count)
            .map(|(kmer, _)| kmer.clone())
            .collect();

        Self {
            k: k.get(),
            max_count,
            most_frequent,
            total_windows: counts.values().sum(),
            distinct: counts.len(),
            counts,
        }
    }

    /// The repeat length.
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Occurrences of every k-mer seen.
    pub const fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Occurrences of one k-mer, 0 if never seen.
    pub fn count(&self, kmer: &str) -> u64 {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// All k-mers reaching [`max_count`](Self::max_count), sorted.
    ///
    /// Empty exactly when `max_count` is 0.
    pub const fn most_frequent(&self) -> &BTreeSet<String> {
        &self.most_frequent
    }

    /// The highest count, 0 when no sequence reached length `k`.
    pub const fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Number of windows counted, `Σ max(0, len - k + 1)`.
    pub const fn total_windows(&self) -> u64 {
        self.total_windows
    }

    /// Number of distinct k-mers.
    pub const fn distinct(&self) -> usize {
        self.distinct
    }
}

/// Counts overlapping k-mers across all records.
///
/// ```rust
/// use seqprobe::kmer::KmerLength;
/// use seqprobe::record::{RecordSet, SequenceRecord};
/// use seqprobe::repeat::count_repeats;
///
/// let set: RecordSet = [
///     SequenceRecord::new("s1", "ATGAAATAA"),
///     SequenceRecord::new("s2", "ATG"),
/// ].into_iter().collect();
///
/// let report = count_repeats(&set, KmerLength::new(3)?);
/// assert_eq!(report.max_count(), 2);
/// assert!(report.most_frequent().contains("ATG"));
/// assert_eq!(report.most_frequent().len(), 1);
/// # Ok::<(), seqprobe::error::ConfigError>(())
/// ```
pub fn count_repeats(records: &RecordSet, k: KmerLength) -> RepeatReport {
    #[cfg(feature = "tracing")]
    let _span = debug_span!("count_repeats", k = k.get(), sequences = records.len()).entered();

    let counter = RepeatCounter::new();
    records
        .par_iter()
        .for_each(|record| counter.process_sequence(record.bases(), k));

    let report = RepeatReport::from_counts(k, counter.into_counts());

    #[cfg(feature = "tracing")]
    info!(
        k = k.get(),
        distinct = report.distinct(),
        max_count = report.max_count(),
        "Repeat counting complete"
    );

    report
}

struct RepeatCounter(DashFx);

impl RepeatCounter {
    fn new() -> Self {
        Self(DashMap::with_hasher(
            BuildHasherDefault::<FxHasher>::default(),
        ))
    }

    fn process_sequence(&self, seq: &Bytes, k: KmerLength) {
        for window in windows(seq, k) {
            if let Some(mut count) = self.0.get_mut(&window) {
                *count += 1;
            } else {
                *self.0.entry(window).or_insert(0) += 1;
            }
        }
    }

    fn into_counts(self) -> HashMap<String, u64> {
        let mut counts = HashMap::with_capacity(self.0.len());
        for (kmer, count) in self.0 {
            *counts
                .entry(String::from_utf8_lossy(&kmer).into_owned())
                .or_insert(0) += count;
        }
        counts
    }
}
