//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use crate::{
    config::{AnalysisConfig, MinLength},
    kmer::KmerLength,
    reader::{DuplicatePolicy, ParseOptions},
    report::OutputFormat,
};

/// Sequence statistics, longest ORFs and most frequent k-mer repeats of a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "seqprobe")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file ("-" for stdin)
    pub path: PathBuf,

    /// Repeat (k-mer) length, at least 1
    #[arg(value_parser = parse_k)]
    pub k: KmerLength,

    /// Leave sequences shorter than this out of per-sequence output
    #[arg(short = 'l', long, default_value = "0", value_parser = parse_min_length)]
    pub min_length: usize,

    /// Skip sequence lines found before the first header instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// How to treat a repeated sequence identifier
    #[arg(long, value_enum, default_value = "last-wins")]
    pub duplicates: DuplicatePolicy,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the records passing --min-length as FASTA instead of a report
    #[arg(long)]
    pub emit_fasta: bool,

    /// Suppress informational output (only write the report)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the analysis configuration from parsed arguments.
    pub const fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            k: self.k,
            min_length: self.min_length,
            parse: ParseOptions {
                lenient: self.lenient,
                duplicates: self.duplicates,
            },
            format: self.format,
            emit_fasta: self.emit_fasta,
        }
    }
}

fn parse_k(s: &str) -> Result<KmerLength, String> {
    s.parse().map_err(|e: crate::error::ConfigError| e.to_string())
}

fn parse_min_length(s: &str) -> Result<usize, String> {
    s.parse::<MinLength>()
        .map(|MinLength(n)| n)
        .map_err(|e| e.to_string())
}
