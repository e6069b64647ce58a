//! Input source abstraction for file and stdin.
//!
//! This module provides the [`Input`] enum for abstracting over different input sources,
//! enabling seamless Unix pipeline integration.
//!
//! # Example
//!
//! ```rust
//! use seqprobe::input::Input;
//! use std::path::Path;
//!
//! // From a file path
//! let input = Input::from_path(Path::new("sequences.fa"));
//! assert!(matches!(input, Input::File(_)));
//!
//! // From stdin marker
//! let input = Input::from_path(Path::new("-"));
//! assert!(matches!(input, Input::Stdin));
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::SeqProbeError;

/// Input source for sequence analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Read from a file at the specified path.
    File(PathBuf),
    /// Read from standard input.
    #[default]
    Stdin,
}

impl Input {
    /// Creates an `Input` from a path.
    ///
    /// If the path is "-", returns [`Self::Stdin`].
    /// Otherwise, returns [`Self::File`] with the given path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Returns `true` if this input is stdin.
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Returns the file path if this is a file input.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Opens the source for line-oriented reading.
    ///
    /// With the `gzip` feature, files ending in `.gz` are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns [`SeqProbeError::Read`] if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SeqProbeError> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| SeqProbeError::Read {
                    source,
                    path: path.clone(),
                })?;
                Ok(wrap_file(path, file))
            }
        }
    }

    /// Path shown in error messages and logs.
    pub(crate) fn display_path(&self) -> PathBuf {
        self.as_path()
            .map_or_else(|| PathBuf::from("<stdin>"), Path::to_path_buf)
    }
}

#[cfg(feature = "gzip")]
fn wrap_file(path: &Path, file: File) -> Box<dyn BufRead> {
    use flate2::read::MultiGzDecoder;

    if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

#[cfg(not(feature = "gzip"))]
fn wrap_file(_path: &Path, file: File) -> Box<dyn BufRead> {
    Box::new(BufReader::new(file))
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
