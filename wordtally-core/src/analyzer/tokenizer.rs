//! Whitespace Tokenizer Module
//!
//! Splits cleaned text into tokens. It is the second stage of the pipeline,
//! taking the output of the [`TextNormalizer`](super::TextNormalizer) and
//! breaking it into countable units.
//!
//! ## What It Does
//!
//! Given cleaned input like `"  the cat\n\tsat  "`, it emits each maximal
//! non-whitespace run with its position:
//!
//! ```ignore
//! ("the", 0)
//! ("cat", 1)
//! ("sat", 2)
//! ```
//!
//! Leading, trailing and repeated whitespace never produce empty tokens.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string
//! - **Streaming**: Tokens are handed to a callback, no intermediate collection
//! - **Conventional whitespace**: Unicode `White_Space` plus the ASCII
//!   information separators (U+001C..=U+001F)
//!
//! ## Usage
//!
//! ```rust
//! use wordtally_core::analyzer::Tokenizer;
//!
//! let mut words = Vec::new();
//! Tokenizer::new().tokenize("hello   world", |text, _position| words.push(text));
//! assert_eq!(words, ["hello", "world"]);
//! ```

/// Returns `true` for characters that separate tokens.
#[inline(always)]
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Streaming whitespace tokenizer.
///
/// Stateless and `Copy`; one instance can be reused for any number of
/// inputs.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes cleaned input and emits `(text, position)` left to right.
    ///
    /// Positions start at zero and increase by one per emitted token.
    #[inline]
    pub fn tokenize<'n, F>(&self, cleaned: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        self.tokens(cleaned)
            .enumerate()
            .for_each(|(pos, text)| emit(text, pos));
    }

    /// Returns an iterator over the tokens of `cleaned`.
    #[inline]
    pub fn tokens<'n>(&self, cleaned: &'n str) -> impl Iterator<Item = &'n str> + 'n {
        cleaned
            .split(is_token_separator)
            .filter(|text| !text.is_empty())
    }

    /// Counts the tokens in `cleaned` without materializing them.
    #[inline]
    pub fn count(&self, cleaned: &str) -> usize {
        self.tokens(cleaned).count()
    }
}
