//! Rendering an [`Analysis`] as text or JSON.
//!
//! The minimum-length filter applies here and only here: per-sequence ORF
//! lines are written for records at least `min_length` bases long, while the
//! summary and repeat sections always describe the whole record set.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    error::SeqProbeError,
    orf::OrfResult,
    record::RecordSet,
    repeat::RepeatReport,
    run::Analysis,
    summary::SummaryStats,
};

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Output format for analysis reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable sections separated by rules
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// An analysis paired with the records it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    records: &'a RecordSet,
    analysis: &'a Analysis,
    min_length: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a SummaryStats,
    orfs: Vec<JsonOrf<'a>>,
    repeats: &'a RepeatReport,
}

#[derive(Serialize)]
struct JsonOrf<'a> {
    id: &'a str,
    #[serde(flatten)]
    orf: &'a OrfResult,
}

impl<'a> Report<'a> {
    pub const fn new(records: &'a RecordSet, analysis: &'a Analysis, min_length: usize) -> Self {
        Self {
            records,
            analysis,
            min_length,
        }
    }

    /// ORF results of records passing the length filter, in record order.
    fn visible_orfs(&self) -> impl Iterator<Item = (&'a str, &'a OrfResult)> {
        let records = self.records;
        let min_length = self.min_length;
        let analysis = self.analysis;
        analysis
            .orfs
            .iter()
            .filter(move |(id, _)| {
                records
                    .get(id.as_str())
                    .is_some_and(|record| record.len() >= min_length)
            })
            .map(|(id, orf)| (id.as_str(), orf))
    }

    /// Writes the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqProbeError::Write`] or [`SeqProbeError::Json`] on output failure.
    pub fn render<W: Write>(&self, format: OutputFormat, out: W) -> Result<(), SeqProbeError> {
        match format {
            OutputFormat::Text => self.render_text(out),
            OutputFormat::Json => self.render_json(out),
        }
    }

    /// Writes the human-readable report.
    pub fn render_text<W: Write>(&self, mut out: W) -> Result<(), SeqProbeError> {
        let summary = &self.analysis.summary;
        writeln!(out, "Number of sequences: {}", summary.total_sequences)?;
        writeln!(out, "{RULE}")?;

        if let (Some(shortest), Some(longest)) = (&summary.shortest, &summary.longest) {
            writeln!(
                out,
                "Shortest sequence: {} ({} bp)",
                shortest.id, shortest.length
            )?;
            writeln!(
                out,
                "Longest sequence:  {} ({} bp)",
                longest.id, longest.length
            )?;
            writeln!(out, "{RULE}")?;
        }

        writeln!(out, "Longest ORF Analysis:")?;
        for (id, orf) in self.visible_orfs() {
            match (orf.frame(), orf.start()) {
                (Some(frame), Some(start)) => writeln!(
                    out,
                    "  {id}: Length={} bp, Frame={frame}, Start={start}",
                    orf.length()
                )?,
                _ => writeln!(out, "  {id}: No ORF found")?,
            }
        }
        writeln!(out, "{RULE}")?;

        let repeats = &self.analysis.repeats;
        writeln!(
            out,
            "Most Frequent {}-mer Repeat(s) (occurred {} times):",
            repeats.k(),
            repeats.max_count()
        )?;
        if repeats.most_frequent().is_empty() {
            writeln!(out, "  (none)")?;
        } else {
            let kmers: Vec<&str> = repeats.most_frequent().iter().map(String::as_str).collect();
            writeln!(out, "  {}", kmers.join(", "))?;
        }
        writeln!(out, "{RULE}")?;

        out.flush()?;
        Ok(())
    }

    /// Writes the report as pretty-printed JSON.
    pub fn render_json<W: Write>(&self, mut out: W) -> Result<(), SeqProbeError> {
        let report = JsonReport {
            summary: &self.analysis.summary,
            orfs: self
                .visible_orfs()
                .map(|(id, orf)| JsonOrf { id, orf })
                .collect(),
            repeats: &self.analysis.repeats,
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
