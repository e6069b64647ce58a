use std::str::FromStr;

use crate::{
    error::ConfigError,
    kmer::KmerLength,
    reader::ParseOptions,
    report::OutputFormat,
};

/// Validated settings for one analysis run.
///
/// ```rust
/// use seqprobe::config::AnalysisConfig;
/// use seqprobe::report::OutputFormat;
///
/// let config = AnalysisConfig::new(3, 100)?.with_format(OutputFormat::Json);
/// assert_eq!(config.k.get(), 3);
/// assert!(AnalysisConfig::new(0, 0).is_err());
/// # Ok::<(), seqprobe::error::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Repeat length.
    pub k: KmerLength,
    /// Records shorter than this are left out of per-sequence output.
    pub min_length: usize,
    pub parse: ParseOptions,
    pub format: OutputFormat,
    /// Write the filtered records as FASTA instead of a report.
    pub emit_fasta: bool,
}

impl AnalysisConfig {
    pub fn new(k: usize, min_length: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            k: KmerLength::new(k)?,
            min_length,
            parse: ParseOptions::default(),
            format: OutputFormat::default(),
            emit_fasta: false,
        })
    }

    #[must_use]
    pub const fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_emit_fasta(mut self, emit_fasta: bool) -> Self {
        self.emit_fasta = emit_fasta;
        self
    }
}

/// Minimum sequence length as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinLength(pub usize);

impl FromStr for MinLength {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidMinLength {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::DuplicatePolicy;

    #[test]
    fn defaults() {
        let config = AnalysisConfig::new(4, 0).unwrap();
        assert_eq!(config.k.get(), 4);
        assert_eq!(config.min_length, 0);
        assert_eq!(config.parse, ParseOptions::strict());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.emit_fasta);
    }

    #[test]
    fn zero_k_is_a_config_error() {
        assert!(matches!(
            AnalysisConfig::new(0, 10),
            Err(ConfigError::InvalidRepeatLength { .. })
        ));
    }

    #[test]
    fn setters_chain() {
        let parse = ParseOptions {
            lenient: true,
            duplicates: DuplicatePolicy::Reject,
        };
        let config = AnalysisConfig::new(2, 5)
            .unwrap()
            .with_parse_options(parse)
            .with_format(OutputFormat::Json)
            .with_emit_fasta(true);
        assert_eq!(config.parse, parse);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.emit_fasta);
    }

    #[test]
    fn min_length_parsing() {
        assert_eq!("12".parse::<MinLength>(), Ok(MinLength(12)));
        assert_eq!("0".parse::<MinLength>(), Ok(MinLength(0)));
        assert_eq!(
            "-1".parse::<MinLength>(),
            Err(ConfigError::InvalidMinLength {
                value: "-1".to_string()
            })
        );
        assert!("ten".parse::<MinLength>().is_err());
    }
}
