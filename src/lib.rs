//! # seqprobe
//!
//! Basic analyses of nucleotide sequences read from FASTA:
//!
//! - record count and the shortest and longest sequence ([`summary`]),
//! - the longest open reading frame per sequence across the three forward
//!   reading frames ([`orf`]),
//! - the most frequent overlapping k-mer(s) pooled over all sequences
//!   ([`repeat`]).
//!
//! ## Quick start
//!
//! ```rust
//! use seqprobe::kmer::KmerLength;
//! use seqprobe::reader::{parse_fasta, ParseOptions};
//! use seqprobe::run::analyze;
//!
//! let fasta = b">s1 first record\nATGAAA\nTAA\n>s2\nATG\n";
//! let records = parse_fasta(&fasta[..], ParseOptions::default())?;
//! let analysis = analyze(&records, KmerLength::new(3)?);
//!
//! assert_eq!(analysis.summary.total_sequences, 2);
//! assert_eq!(analysis.orfs["s1"].length(), 9);
//! assert!(analysis.repeats.most_frequent().contains("ATG"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured logging via [`tracing`](https://docs.rs/tracing)
//! - `gzip`: transparent decompression of `.gz` inputs

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod kmer;
pub mod orf;
pub mod reader;
pub mod record;
pub mod repeat;
pub mod report;
pub mod run;
pub mod summary;
pub mod writer;
