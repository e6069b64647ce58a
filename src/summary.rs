//! Record count and length extremes.

use serde::Serialize;

use crate::record::{RecordSet, SequenceRecord};

/// A sequence picked as shortest or longest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthExtreme {
    pub id: String,
    pub length: usize,
}

impl LengthExtreme {
    fn of(record: &SequenceRecord) -> Self {
        Self {
            id: record.id().to_string(),
            length: record.len(),
        }
    }
}

/// Summary of a record set.
///
/// `shortest` and `longest` are `None` only when the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_sequences: usize,
    pub shortest: Option<LengthExtreme>,
    pub longest: Option<LengthExtreme>,
}

impl SummaryStats {
    /// Returns `true` for the "no data" result of an empty set.
    pub const fn is_empty(&self) -> bool {
        self.total_sequences == 0
    }
}

/// Counts records and finds the shortest and longest ones.
///
/// Ties go to the record inserted first.
///
/// ```rust
/// use seqprobe::record::{RecordSet, SequenceRecord};
/// use seqprobe::summary::summarize;
///
/// let set: RecordSet = [
///     SequenceRecord::new("s1", "ATGAAATAA"),
///     SequenceRecord::new("s2", "ATG"),
/// ].into_iter().collect();
///
/// let stats = summarize(&set);
/// assert_eq!(stats.total_sequences, 2);
/// assert_eq!(stats.shortest.map(|s| s.id), Some("s2".to_string()));
/// assert_eq!(stats.longest.map(|s| s.id), Some("s1".to_string()));
/// ```
pub fn summarize(records: &RecordSet) -> SummaryStats {
    let mut shortest: Option<&SequenceRecord> = None;
    let mut longest: Option<&SequenceRecord> = None;

    for record in records {
        if shortest.map_or(true, |s| record.len() < s.len()) {
            shortest = Some(record);
        }
        if longest.map_or(true, |l| record.len() > l.len()) {
            longest = Some(record);
        }
    }

    SummaryStats {
        total_sequences: records.len(),
        shortest: shortest.map(LengthExtreme::of),
        longest: longest.map(LengthExtreme::of),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[(&str, &str)]) -> RecordSet {
        items
            .iter()
            .map(|(id, seq)| SequenceRecord::new(*id, seq.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn empty_set_is_no_data() {
        let stats = summarize(&RecordSet::new());
        assert!(stats.is_empty());
        assert_eq!(stats.shortest, None);
        assert_eq!(stats.longest, None);
    }

    #[test]
    fn single_record_is_both_extremes() {
        let stats = summarize(&set(&[("only", "ACGT")]));
        let expected = Some(LengthExtreme {
            id: "only".to_string(),
            length: 4,
        });
        assert_eq!(stats.shortest, expected);
        assert_eq!(stats.longest, expected);
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let stats = summarize(&set(&[("a", "AC"), ("b", "GT"), ("c", "ACGT"), ("d", "TTTT")]));
        assert_eq!(stats.shortest.map(|s| s.id), Some("a".to_string()));
        assert_eq!(stats.longest.map(|l| l.id), Some("c".to_string()));
    }

    #[test]
    fn empty_sequence_counts_as_length_zero() {
        let stats = summarize(&set(&[("s1", "ATGAAATAA"), ("blank", "")]));
        assert_eq!(
            stats.shortest,
            Some(LengthExtreme {
                id: "blank".to_string(),
                length: 0
            })
        );
    }
}
