//! # wordtally-core
//!
//! Reads a text file, normalizes it and tallies word frequencies.
//!
//! ## Pipeline
//!
//! ```text
//! loader -> analyzer::normalizer -> analyzer::tokenizer -> tally
//! ```
//!
//! - [`loader`]: reads a file into memory, logging a diagnostic on failure
//! - [`analyzer`]: lowercases, deletes ASCII punctuation, splits on whitespace
//! - [`tally`]: counts tokens into a [`FrequencyTable`]
//! - [`chart`]: optional top-N bar charts behind the [`ChartRenderer`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordtally_core::{count_words, plot_words, TextBarChart};
//!
//! let table = count_words("story.txt")?;
//! for entry in table.most_common(3) {
//!     println!("{entry}");
//! }
//!
//! let chart = plot_words(&table, 3, &TextBarChart::default())?;
//! print!("{chart}");
//! # Ok::<(), wordtally_core::TallyError>(())
//! ```

pub mod analyzer;
pub mod arena;
pub mod chart;
pub mod loader;
pub mod tally;

pub use analyzer::{clean_text, is_token, TextNormalizer, Tokenizer};
pub use chart::{plot_words, top_words, ChartConfig, ChartRenderer, SvgBarChart, TextBarChart};
pub use loader::{load_text_file, FsSource, TextSource};
pub use tally::{count_words, FrequencyTable, TallyStats, WordTally};
pub use wordtally_types::{ErrorKind, FileMode, Result, TallyError, TopN, WordCount};
