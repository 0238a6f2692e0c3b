//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases raw text and deletes ASCII punctuation
//! - **Tokenizer**: Splits cleaned text on runs of whitespace

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{clean_text, TextNormalizer, PUNCTUATION};
pub use tokenizer::{is_token_separator, Tokenizer};

/// Returns `true` if `text` could have come out of the pipeline as a single
/// token: non-empty, already lowercase, and free of ASCII punctuation and
/// separators.
pub fn is_token(text: &str) -> bool {
    if text.is_empty()
        || text
            .chars()
            .any(|c| is_token_separator(c) || c.is_ascii_punctuation())
    {
        return false;
    }

    if text.is_ascii() {
        !text.bytes().any(|b| b.is_ascii_uppercase())
    } else {
        text.to_lowercase() == text
    }
}
