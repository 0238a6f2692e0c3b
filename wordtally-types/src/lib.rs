//! Core types and errors for the wordtally toolkit.
//!
//! This crate provides the types shared between the tally pipeline and
//! its front ends. Keeping them separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI agree on one error type
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Validated inputs**: Arguments such as [`TopN`] are checked once, at
//!   construction, and carried around already valid

#![warn(missing_docs)]

use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse classification of a [`TallyError`].
///
/// Callers that only care about *what kind* of failure happened (tests,
/// exit-code mapping) match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested file does not exist.
    NotFound,
    /// The file exists but could not be read.
    IoFailure,
    /// A precondition on an argument was violated.
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::IoFailure => "I/O failure",
            ErrorKind::InvalidArgument => "invalid argument",
        };
        f.write_str(name)
    }
}

/// Errors produced while loading, normalizing, tallying or charting text.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The path does not reference an existing file.
    #[error("the file '{}' does not exist", .path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Any other I/O-level problem (permissions, directories, bad encoding).
    #[error("an I/O error occurred while accessing the file '{}': {source}", .path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A precondition on an argument was violated.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the violated precondition.
        reason: String,
    },
}

impl TallyError {
    /// Classifies an I/O error raised while accessing `path`.
    ///
    /// `io::ErrorKind::NotFound` becomes [`TallyError::NotFound`]; everything
    /// else becomes [`TallyError::Io`].
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            TallyError::NotFound { path, source }
        } else {
            TallyError::Io { path, source }
        }
    }

    /// Creates an [`TallyError::InvalidArgument`] with the given reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        TallyError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns the coarse kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::NotFound { .. } => ErrorKind::NotFound,
            TallyError::Io { .. } => ErrorKind::IoFailure,
            TallyError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Returns the offending path for I/O-related errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TallyError::NotFound { path, .. } | TallyError::Io { path, .. } => Some(path),
            TallyError::InvalidArgument { .. } => None,
        }
    }
}

/// Result alias used throughout wordtally.
pub type Result<T> = std::result::Result<T, TallyError>;

/// How a file is opened.
///
/// Mirrors the conventional `r`/`w`/`a` mode strings and their binary
/// (`b`) variants. Only readable modes can produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileMode {
    /// Read as UTF-8 text (`r`).
    #[default]
    Read,
    /// Write text, truncating (`w`).
    Write,
    /// Append text (`a`).
    Append,
    /// Read raw bytes (`rb`).
    ReadBinary,
    /// Write raw bytes, truncating (`wb`).
    WriteBinary,
    /// Append raw bytes (`ab`).
    AppendBinary,
}

impl FileMode {
    /// Returns the canonical mode string.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            FileMode::Read => "r",
            FileMode::Write => "w",
            FileMode::Append => "a",
            FileMode::ReadBinary => "rb",
            FileMode::WriteBinary => "wb",
            FileMode::AppendBinary => "ab",
        }
    }

    /// Returns `true` if the mode permits reading.
    #[inline]
    pub const fn is_readable(self) -> bool {
        matches!(self, FileMode::Read | FileMode::ReadBinary)
    }

    /// Returns `true` for the byte-oriented variants.
    #[inline]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            FileMode::ReadBinary | FileMode::WriteBinary | FileMode::AppendBinary
        )
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" | "rt" => Ok(FileMode::Read),
            "w" | "wt" => Ok(FileMode::Write),
            "a" | "at" => Ok(FileMode::Append),
            "rb" => Ok(FileMode::ReadBinary),
            "wb" => Ok(FileMode::WriteBinary),
            "ab" => Ok(FileMode::AppendBinary),
            other => Err(TallyError::invalid_argument(format!(
                "unknown file mode '{other}'"
            ))),
        }
    }
}

/// A word paired with its number of occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordCount<'a> {
    /// The token.
    pub word: &'a str,
    /// How many times the token occurred.
    pub count: u64,
}

impl<'a> WordCount<'a> {
    /// Creates a new entry.
    #[inline(always)]
    pub const fn new(word: &'a str, count: u64) -> Self {
        Self { word, count }
    }
}

impl fmt::Display for WordCount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// A validated, strictly positive number of entries to select.
///
/// Construction is the only place the "N must be a positive integer"
/// precondition is checked; holders of a `TopN` never re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TopN(NonZeroUsize);

impl TopN {
    /// Validates `n`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidArgument`] when `n` is zero or negative,
    /// or does not fit the platform's `usize`.
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(TallyError::invalid_argument(format!(
                "the number of top words (n) must be a positive integer, got {n}"
            )));
        }
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| {
                TallyError::invalid_argument(format!("the number of top words (n) is too large: {n}"))
            })
    }

    /// Returns the count as a `usize`.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for TopN {
    type Error = TallyError;

    fn try_from(n: i64) -> Result<Self> {
        Self::new(n)
    }
}

impl FromStr for TopN {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s.trim().parse().map_err(|_| {
            TallyError::invalid_argument(format!(
                "the number of top words (n) must be a positive integer, got '{s}'"
            ))
        })?;
        Self::new(n)
    }
}

impl fmt::Display for TopN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
