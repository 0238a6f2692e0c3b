//! Word frequency counting.
//!
//! [`WordTally`] runs the whole pipeline for one file:
//!
//! ```text
//! load (TextSource) -> clean (TextNormalizer) -> split (Tokenizer) -> tally (FrequencyTable)
//! ```
//!
//! Each call is independent. Nothing is cached between calls and the only
//! side effects are the file read and the loader's diagnostics.

mod stats;
mod table;

pub use stats::TallyStats;
pub use table::FrequencyTable;

use std::path::Path;

use log::debug;
use wordtally_types::{FileMode, Result, TallyError};

use crate::analyzer::{TextNormalizer, Tokenizer};
use crate::loader::{FsSource, TextSource};

/// Counts words in text files.
///
/// Generic over its [`TextSource`] so the loader can be swapped; the default
/// reads from the filesystem.
#[derive(Debug, Default, Clone)]
pub struct WordTally<S = FsSource> {
    source: S,
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
}

impl WordTally {
    /// Creates a tally that reads from the filesystem.
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl<S: TextSource> WordTally<S> {
    /// Creates a tally that reads through `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads `path`, cleans it and counts every token.
    ///
    /// # Errors
    ///
    /// - [`TallyError::InvalidArgument`] if `path` is empty or not valid
    ///   Unicode. The source is never consulted in that case.
    /// - [`TallyError::NotFound`] / [`TallyError::Io`] from the source,
    ///   unchanged.
    pub fn count_words(&self, path: impl AsRef<Path>) -> Result<FrequencyTable> {
        let path = path.as_ref();
        validate_path(path)?;

        let raw = self.source.load(path, FileMode::Read)?;
        let table = self.count_text(&raw)?;

        debug!(
            "tallied '{}': {} tokens, {} distinct words",
            path.display(),
            table.total(),
            table.len()
        );
        Ok(table)
    }

    /// Cleans already-loaded text and counts every token.
    ///
    /// # Errors
    ///
    /// [`TallyError::InvalidArgument`] if the text holds more distinct words
    /// than a [`FrequencyTable`] can index.
    pub fn count_text(&self, raw: &str) -> Result<FrequencyTable> {
        let cleaned = self.normalizer.normalize(raw);
        let mut table = FrequencyTable::new();
        for token in self.tokenizer.tokens(&cleaned) {
            table.record(token)?;
        }
        Ok(table)
    }
}

/// Checks that `path` is a non-empty string before any I/O happens.
fn validate_path(path: &Path) -> Result<&str> {
    let text = path.to_str().ok_or_else(|| {
        TallyError::invalid_argument(format!(
            "the path must be a string, got non-Unicode path {}",
            path.display()
        ))
    })?;

    if text.is_empty() {
        return Err(TallyError::invalid_argument("the path must not be empty"));
    }

    Ok(text)
}

/// Counts the words in the file at `path`.
///
/// Shorthand for [`WordTally::new().count_words(path)`](WordTally::count_words).
pub fn count_words(path: impl AsRef<Path>) -> Result<FrequencyTable> {
    WordTally::new().count_words(path)
}
