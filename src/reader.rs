//! FASTA parsing into a [`RecordSet`].
//!
//! The parser is a single forward pass over lines:
//! - blank lines are skipped,
//! - a line starting with `>` opens a record keyed by the first
//!   whitespace-delimited token after the marker,
//! - any other line is appended to the most recently opened record.
//!
//! Sequence data before the first header is rejected unless
//! [`ParseOptions::lenient`] is set, in which case the line is skipped.

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use clap::ValueEnum;

use crate::{
    error::{FormatError, SeqProbeError},
    input::Input,
    record::{RecordSet, SequenceRecord},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span, warn};

/// What to do when a header repeats an identifier already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one, keeping its position.
    #[default]
    LastWins,
    /// Fail with [`FormatError::DuplicateIdentifier`].
    Reject,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Skip sequence lines that appear before any header instead of failing.
    pub lenient: bool,
    /// Handling of repeated identifiers.
    pub duplicates: DuplicatePolicy,
}

impl ParseOptions {
    /// Strict parsing with last-write-wins duplicates.
    pub const fn strict() -> Self {
        Self {
            lenient: false,
            duplicates: DuplicatePolicy::LastWins,
        }
    }
}

/// Reads and parses FASTA from `input`.
///
/// # Errors
///
/// Returns [`SeqProbeError::Read`] if the source cannot be opened or read and
/// [`SeqProbeError::Format`] for malformed input.
pub fn read_fasta(input: &Input, options: ParseOptions) -> Result<RecordSet, SeqProbeError> {
    let reader = input.open()?;
    parse_lines(reader, options, &input.display_path())
}

/// Parses FASTA from any buffered reader.
///
/// # Example
///
/// ```rust
/// use seqprobe::reader::{parse_fasta, ParseOptions};
///
/// let records = parse_fasta(&b">s1 first\nATGAAA\nTAA\n>s2\nATG\n"[..], ParseOptions::default())?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records.get("s1").map(|r| r.len()), Some(9));
/// # Ok::<(), seqprobe::error::SeqProbeError>(())
/// ```
///
/// # Errors
///
/// Returns [`SeqProbeError::Read`] if reading fails and [`SeqProbeError::Format`]
/// for malformed input.
pub fn parse_fasta<R: BufRead>(reader: R, options: ParseOptions) -> Result<RecordSet, SeqProbeError> {
    parse_lines(reader, options, Path::new("<reader>"))
}

fn parse_lines<R: BufRead>(
    reader: R,
    options: ParseOptions,
    origin: &Path,
) -> Result<RecordSet, SeqProbeError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("parse_fasta", path = ?origin).entered();

    let mut records = RecordSet::new();
    let mut current: Option<(String, Vec<u8>)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| SeqProbeError::Read {
            source,
            path: PathBuf::from(origin),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some((id, bases)) = current.take() {
                records.insert(SequenceRecord::new(id, bases));
            }

            let id = header
                .split_whitespace()
                .next()
                .ok_or(FormatError::EmptyIdentifier { line: line_no })?;

            if records.contains(id) {
                match options.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(FormatError::DuplicateIdentifier {
                            id: id.to_string(),
                            line: line_no,
                        }
                        .into());
                    }
                    DuplicatePolicy::LastWins => {
                        #[cfg(feature = "tracing")]
                        debug!(id, line = line_no, "Duplicate identifier replaces earlier record");
                    }
                }
            }

            current = Some((id.to_string(), Vec::new()));
        } else {
            match current.as_mut() {
                Some((_, bases)) => {
                    bases.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
                }
                None if options.lenient => {
                    #[cfg(feature = "tracing")]
                    warn!(line = line_no, "Skipping sequence data before first header");
                }
                None => return Err(FormatError::SequenceBeforeHeader { line: line_no }.into()),
            }
        }
    }

    if let Some((id, bases)) = current {
        records.insert(SequenceRecord::new(id, bases));
    }

    #[cfg(feature = "tracing")]
    info!(records = records.len(), "Parsed FASTA records");

    Ok(records)
}
