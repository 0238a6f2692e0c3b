//! Text Normalizer Module
//!
//! First stage of the pipeline: lowercases raw text and deletes the 32 ASCII
//! punctuation characters. Whitespace passes through untouched.

use wordtally_types::{Result, TallyError};

/// The 32 ASCII punctuation characters removed during normalization.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Marker for bytes that are deleted outright.
const DROP: u8 = 0xFF;

/// ASCII fold table: uppercase maps to lowercase, punctuation maps to
/// [`DROP`], everything else maps to itself.
const CLEAN_TABLE: [u8; 128] = build_clean_table();

const fn build_clean_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0usize;
    while b < 128 {
        let byte = b as u8;
        table[b] = if byte.is_ascii_punctuation() {
            DROP
        } else {
            byte.to_ascii_lowercase()
        };
        b += 1;
    }
    table
}

/// Lowercases text and deletes ASCII punctuation.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware, context-sensitive
///   for final sigma)
/// - Removes every character in [`PUNCTUATION`] without replacing it, so
///   `"don't"` becomes `"dont"` and `"end.Start"` becomes `"endstart"`
///
/// Whitespace is preserved verbatim, including repeated runs; splitting is
/// left to the [`Tokenizer`](super::Tokenizer).
///
/// # Examples
///
/// ```
/// use wordtally_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello, World!"), "hello world");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity when
    /// sufficient. Pure ASCII input takes a table-driven byte path.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        if input.is_ascii() {
            out.reserve(input.len());
            for &b in input.as_bytes() {
                let folded = CLEAN_TABLE[b as usize];
                if folded != DROP {
                    out.push(folded as char);
                }
            }
            return;
        }

        // Lowercasing first keeps final-sigma context identical to the
        // un-stripped text.
        let lowered = input.to_lowercase();
        out.reserve(lowered.len());
        out.extend(lowered.chars().filter(|c| !c.is_ascii_punctuation()));
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Normalizes raw bytes that are expected to hold UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidArgument`] if `input` is not valid UTF-8;
    /// nothing is normalized in that case.
    pub fn normalize_bytes(&self, input: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(input).map_err(|e| {
            TallyError::invalid_argument(format!("input must be a string: {e}"))
        })?;
        Ok(self.normalize(text))
    }
}

/// Lowercases `text` and removes ASCII punctuation.
#[inline]
pub fn clean_text(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}
