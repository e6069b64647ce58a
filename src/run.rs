//! The analysis pipeline.
//!
//! Parsing produces an immutable [`RecordSet`]; the summary, ORF search and
//! repeat count then run concurrently over shared references to it and are
//! joined before rendering.

use std::io::Write;

use indexmap::IndexMap;

use crate::{
    config::AnalysisConfig,
    error::SeqProbeError,
    input::Input,
    kmer::KmerLength,
    orf::{find_longest_orfs, OrfResult},
    reader::read_fasta,
    record::RecordSet,
    repeat::{count_repeats, RepeatReport},
    report::Report,
    summary::{summarize, SummaryStats},
    writer::write_fasta,
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

/// Results of the three analyses over one record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub summary: SummaryStats,
    /// Longest ORF per record, in record order.
    pub orfs: IndexMap<String, OrfResult>,
    pub repeats: RepeatReport,
}

/// Runs summary, ORF search and repeat counting over `records`.
///
/// Never fails: an empty record set yields zero-valued results.
///
/// ```rust
/// use seqprobe::kmer::KmerLength;
/// use seqprobe::reader::{parse_fasta, ParseOptions};
/// use seqprobe::run::analyze;
///
/// let records = parse_fasta(&b">s1\nATGAAATAA\n>s2\nATG\n"[..], ParseOptions::default())?;
/// let analysis = analyze(&records, KmerLength::new(3)?);
///
/// assert_eq!(analysis.summary.total_sequences, 2);
/// assert_eq!(analysis.orfs["s1"].length(), 9);
/// assert_eq!(analysis.repeats.max_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn analyze(records: &RecordSet, k: KmerLength) -> Analysis {
    #[cfg(feature = "tracing")]
    let _span = info_span!("analyze", sequences = records.len(), k = k.get()).entered();

    let (summary, (orfs, repeats)) = rayon::join(
        || summarize(records),
        || rayon::join(|| find_longest_orfs(records), || count_repeats(records, k)),
    );

    Analysis {
        summary,
        orfs,
        repeats,
    }
}

/// Reads `input` and analyzes it.
///
/// # Errors
///
/// Returns [`SeqProbeError::Read`] or [`SeqProbeError::Format`] if the input
/// cannot be parsed; no analysis is attempted in that case.
pub fn analyze_input(
    input: &Input,
    config: &AnalysisConfig,
) -> Result<(RecordSet, Analysis), SeqProbeError> {
    let records = read_fasta(input, config.parse)?;
    let analysis = analyze(&records, config.k);
    Ok((records, analysis))
}

/// Reads `input`, analyzes it and writes the report to `out`.
///
/// With [`AnalysisConfig::emit_fasta`] set, the records passing the length
/// filter are written back as FASTA instead.
///
/// # Errors
///
/// Returns `SeqProbeError` on read, parse, write or serialization errors.
pub fn run<W: Write>(input: &Input, config: &AnalysisConfig, out: W) -> Result<(), SeqProbeError> {
    #[cfg(feature = "tracing")]
    info!(input = %input, k = config.k.get(), min_length = config.min_length, "Starting analysis");

    if config.emit_fasta {
        let records = read_fasta(input, config.parse)?;
        let _written = write_fasta(&records, config.min_length, out)?;

        #[cfg(feature = "tracing")]
        info!(written = _written, total = records.len(), "Wrote filtered records");

        return Ok(());
    }

    let (records, analysis) = analyze_input(input, config)?;
    Report::new(&records, &analysis, config.min_length).render(config.format, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        orf::Frame,
        reader::{parse_fasta, ParseOptions},
    };

    #[test]
    fn scenario_two_records() {
        let records =
            parse_fasta(&b">s1\nATGAAATAA\n>s2\nATG\n"[..], ParseOptions::default()).unwrap();
        let analysis = analyze(&records, KmerLength::new(3).unwrap());

        assert_eq!(analysis.summary.total_sequences, 2);
        assert_eq!(
            analysis.summary.shortest.as_ref().map(|s| (s.id.as_str(), s.length)),
            Some(("s2", 3))
        );
        assert_eq!(
            analysis.summary.longest.as_ref().map(|l| (l.id.as_str(), l.length)),
            Some(("s1", 9))
        );

        let s1 = analysis.orfs["s1"];
        assert_eq!(
            (s1.length(), s1.frame(), s1.start()),
            (9, Some(Frame::One), Some(0))
        );
        assert!(!analysis.orfs["s2"].is_found());

        assert_eq!(analysis.repeats.count("ATG"), 2);
        assert_eq!(analysis.repeats.max_count(), 2);
        assert_eq!(analysis.repeats.most_frequent().len(), 1);
    }

    #[test]
    fn empty_record_set_is_all_zero() {
        let analysis = analyze(&RecordSet::new(), KmerLength::new(3).unwrap());
        assert_eq!(analysis.summary.total_sequences, 0);
        assert!(analysis.orfs.is_empty());
        assert!(analysis.repeats.counts().is_empty());
        assert_eq!(analysis.repeats.max_count(), 0);
    }

    #[test]
    fn header_only_record() {
        let records = parse_fasta(&b">lonely\n"[..], ParseOptions::default()).unwrap();
        let analysis = analyze(&records, KmerLength::new(2).unwrap());
        assert_eq!(
            analysis.summary.shortest.as_ref().map(|s| s.length),
            Some(0)
        );
        assert_eq!(analysis.orfs["lonely"], OrfResult::none());
    }
}
