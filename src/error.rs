//! Error types for seqprobe.
//!
//! This module provides exhaustive, strongly-typed errors for reading input,
//! validating configuration and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in seqprobe operations.
#[derive(Debug, Error)]
pub enum SeqProbeError {
    /// The input source could not be opened or read.
    #[error("failed to read sequence input '{path}': {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The input is not valid FASTA.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Analysis parameters were rejected before any input was read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed FASTA input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A sequence line appeared before any `>` header.
    #[error("sequence data found before a header at line {line}")]
    SequenceBeforeHeader { line: usize },

    /// A header line carried no identifier after `>`.
    #[error("header without an identifier at line {line}")]
    EmptyIdentifier { line: usize },

    /// An identifier was seen twice while duplicates are rejected.
    #[error("duplicate sequence identifier '{id}' at line {line}")]
    DuplicateIdentifier { id: String, line: usize },
}

/// Invalid analysis parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Repeat length must be a positive integer.
    #[error("invalid repeat length '{value}': must be a positive integer")]
    InvalidRepeatLength { value: String },

    /// Minimum length filter must be a non-negative integer.
    #[error("invalid minimum length '{value}': must be a non-negative integer")]
    InvalidMinLength { value: String },
}

impl From<std::io::Error> for SeqProbeError {
    fn from(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

impl From<serde_json::Error> for SeqProbeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display() {
        let err = FormatError::SequenceBeforeHeader { line: 1 };
        assert_eq!(
            err.to_string(),
            "sequence data found before a header at line 1"
        );

        let err = FormatError::DuplicateIdentifier {
            id: "s1".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "duplicate sequence identifier 's1' at line 7"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidRepeatLength {
            value: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid repeat length '0': must be a positive integer"
        );

        let err = ConfigError::InvalidMinLength {
            value: "-3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid minimum length '-3': must be a non-negative integer"
        );
    }

    #[test]
    fn seqprobe_error_from_format_error() {
        let err: SeqProbeError = FormatError::EmptyIdentifier { line: 2 }.into();
        assert!(matches!(
            err,
            SeqProbeError::Format(FormatError::EmptyIdentifier { line: 2 })
        ));
    }

    #[test]
    fn seqprobe_error_from_config_error() {
        let err: SeqProbeError = ConfigError::InvalidRepeatLength {
            value: "-1".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            SeqProbeError::Config(ConfigError::InvalidRepeatLength { .. })
        ));
    }

    #[test]
    fn io_error_maps_to_write() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SeqProbeError = io.into();
        assert!(matches!(err, SeqProbeError::Write { .. }));
    }
}
