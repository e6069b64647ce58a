//! Validated k-mer lengths and overlapping windows.

use std::{fmt, str::FromStr};

use bytes::Bytes;

use crate::error::ConfigError;

/// A repeat length known to be at least 1.
///
/// # Example
///
/// ```rust
/// use seqprobe::kmer::KmerLength;
///
/// let k = KmerLength::new(3)?;
/// assert_eq!(k.get(), 3);
/// assert!(KmerLength::new(0).is_err());
/// # Ok::<(), seqprobe::error::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Validates `k`.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        if k == 0 {
            return Err(ConfigError::InvalidRepeatLength {
                value: k.to_string(),
            });
        }
        Ok(Self(k))
    }

    /// The raw length.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of overlapping windows in a sequence of `len` bases.
    pub const fn window_count(self, len: usize) -> usize {
        (len + 1).saturating_sub(self.0)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KmerLength {
    type Err = ConfigError;

    /// Parses a repeat length as typed by a user.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(k) if k > 0 => Ok(Self(k)),
            _ => Err(ConfigError::InvalidRepeatLength {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = ConfigError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// Overlapping windows of width `k`, advancing one base at a time.
///
/// Each window shares the backing buffer of `seq`. Sequences shorter than `k`
/// yield nothing.
///
/// ```rust
/// use bytes::Bytes;
/// use seqprobe::kmer::{windows, KmerLength};
///
/// let k = KmerLength::new(3)?;
/// let kmers: Vec<Bytes> = windows(&Bytes::from_static(b"ATGA"), k).collect();
/// assert_eq!(kmers, vec![Bytes::from_static(b"ATG"), Bytes::from_static(b"TGA")]);
/// # Ok::<(), seqprobe::error::ConfigError>(())
/// ```
pub fn windows(seq: &Bytes, k: KmerLength) -> impl Iterator<Item = Bytes> + '_ {
    let k = k.get();
    (0..(seq.len() + 1).saturating_sub(k)).map(move |i| seq.slice(i..i + k))
}
