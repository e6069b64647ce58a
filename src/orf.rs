//! Longest open reading frame search over the three forward frames.
//!
//! An ORF runs from an `ATG` start codon to the first in-frame stop codon
//! (`TAA`, `TAG` or `TGA`), both codons included. For each sequence the
//! longest ORF across frames 1, 2 and 3 is reported; on equal lengths the
//! first one found wins, scanning frame 1 before 2 before 3 and left to right
//! within a frame.
//!
//! Stop positions are precomputed per frame with one backward pass, so each
//! frame is scanned in linear time.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Serialize, Serializer};

use crate::record::RecordSet;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Codon width in bases.
pub const CODON_LEN: usize = 3;

/// The start codon.
pub const START_CODON: &[u8; CODON_LEN] = b"ATG";

/// The stop codons.
pub const STOP_CODONS: [&[u8; CODON_LEN]; 3] = [b"TAA", b"TAG", b"TGA"];

/// One of the three forward reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Frame {
    One,
    Two,
    Three,
}

impl Frame {
    /// Frames in scan order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Offset of the first codon of this frame.
    pub const fn offset(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// The 1-based frame number.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Longest ORF of one sequence.
///
/// `frame` and `start` are both `None` exactly when no ORF was found, in which
/// case `length` is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrfResult {
    length: usize,
    frame: Option<Frame>,
    start: Option<usize>,
}

impl OrfResult {
    /// The "no ORF found" result.
    pub const fn none() -> Self {
        Self {
            length: 0,
            frame: None,
            start: None,
        }
    }

    const fn found(length: usize, frame: Frame, start: usize) -> Self {
        Self {
            length,
            frame: Some(frame),
            start: Some(start),
        }
    }

    /// ORF length in bases, start and stop codons included.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Reading frame of the ORF.
    pub const fn frame(&self) -> Option<Frame> {
        self.frame
    }

    /// 0-based offset of the start codon.
    pub const fn start(&self) -> Option<usize> {
        self.start
    }

    /// Returns `true` if an ORF was found.
    pub const fn is_found(&self) -> bool {
        self.frame.is_some()
    }
}

fn is_start(codon: &[u8]) -> bool {
    codon == START_CODON
}

fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}

/// `(start, stop)` offsets of every start codon in the frame that has a
/// later in-frame stop, in left-to-right order.
fn frame_candidates(bases: &[u8], frame: Frame) -> Vec<(usize, usize)> {
    let codons: Vec<usize> = (frame.offset()..)
        .step_by(CODON_LEN)
        .take_while(|&i| i + CODON_LEN <= bases.len())
        .collect();

    // next_stop[n] is the first stop strictly after codon n.
    let mut next_stop = vec![None; codons.len()];
    let mut nearest = None;
    for (n, &i) in codons.iter().enumerate().rev() {
        next_stop[n] = nearest;
        if is_stop(&bases[i..i + CODON_LEN]) {
            nearest = Some(i);
        }
    }

    codons
        .into_iter()
        .zip(next_stop)
        .filter(|&(i, _)| is_start(&bases[i..i + CODON_LEN]))
        .filter_map(|(i, stop)| stop.map(|j| (i, j)))
        .collect()
}

/// Finds the longest ORF in `bases`.
///
/// ```rust
/// use seqprobe::orf::{find_longest_orf, Frame};
///
/// let orf = find_longest_orf(b"CATGAAATAGG");
/// assert_eq!(orf.length(), 9);
/// assert_eq!(orf.frame(), Some(Frame::Two));
/// assert_eq!(orf.start(), Some(1));
///
/// assert!(!find_longest_orf(b"ATG").is_found());
/// ```
pub fn find_longest_orf(bases: &[u8]) -> OrfResult {
    let mut best = OrfResult::none();

    for frame in Frame::ALL {
        for (start, stop) in frame_candidates(bases, frame) {
            let length = stop + CODON_LEN - start;
            if length > best.length {
                best = OrfResult::found(length, frame, start);
            }
        }
    }

    best
}

/// Finds the longest ORF of every record, keyed by identifier in record order.
pub fn find_longest_orfs(records: &RecordSet) -> IndexMap<String, OrfResult> {
    let results: Vec<(String, OrfResult)> = records
        .par_iter()
        .map(|record| (record.id().to_string(), find_longest_orf(record.bases())))
        .collect();

    #[cfg(feature = "tracing")]
    debug!(
        sequences = results.len(),
        with_orf = results.iter().filter(|(_, orf)| orf.is_found()).count(),
        "ORF search complete"
    );

    results.into_iter().collect()
}
