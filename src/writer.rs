//! FASTA emission of a [`RecordSet`].

use std::io::Write;

use bio::io::fasta;

use crate::{error::SeqProbeError, record::RecordSet};

/// Writes every record at least `min_length` bases long as `>id\nsequence`.
///
/// Records are written in insertion order, one sequence line per record.
/// Returns the number of records written.
///
/// # Errors
///
/// Returns [`SeqProbeError::Write`] if the writer fails.
pub fn write_fasta<W: Write>(
    records: &RecordSet,
    min_length: usize,
    writer: W,
) -> Result<usize, SeqProbeError> {
    let mut out = fasta::Writer::new(writer);
    let mut written = 0;

    for record in records.iter().filter(|r| r.len() >= min_length) {
        out.write(record.id(), None, record.bases())?;
        written += 1;
    }
    out.flush()?;

    Ok(written)
}
