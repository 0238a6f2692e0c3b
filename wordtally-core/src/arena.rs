//! Bump Storage for Distinct Words
//!
//! Stores every distinct word once, in a single contiguous buffer, in the
//! order the words were first seen. Words are referenced by (offset, length)
//! spans and identified by their index, so a word's id doubles as its
//! first-occurrence rank.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena Buffer: [the][cat][sat][on]...[free space]
//!               ^    ^    ^    ^
//!               |    |    |    |
//! Spans:      (0,3) (3,3) (6,3) (9,2) ...
//! ```
//!
//! ## Performance
//!
//! - Allocation: amortized O(1), one append per distinct word
//! - Retrieval: O(1), slice from buffer
//! - Iteration: sequential over the buffer

/// Word reference into the arena buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    offset: usize,
    len: usize,
}

impl WordSpan {
    /// Creates a new word span.
    #[inline(always)]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len
    }

    #[inline(always)]
    const fn end(self) -> usize {
        self.offset + self.len
    }
}

/// Id for the word stored after `len` others, if it fits in a `u32`.
#[inline(always)]
fn next_id(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

/// Append-only storage for distinct words.
#[derive(Debug, Clone)]
pub struct WordArena {
    /// Contiguous storage buffer
    buffer: String,
    /// Word spans, indexed by word id
    spans: Vec<WordSpan>,
}

impl Default for WordArena {
    fn default() -> Self {
        Self::new()
    }
}

impl WordArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::with_capacity(4 * 1024, 256)
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(buffer_cap: usize, word_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(buffer_cap),
            spans: Vec::with_capacity(word_cap),
        }
    }

    /// Returns the number of words stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no words are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the total number of bytes held by stored words.
    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Clears all words, keeping capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
    }

    /// Appends a word and returns its id.
    ///
    /// Does not deduplicate; that is the caller's job. Returns `None` once
    /// every `u32` id is taken.
    #[inline]
    pub fn push(&mut self, word: &str) -> Option<u32> {
        let id = next_id(self.spans.len())?;
        let offset = self.buffer.len();

        // 1.5x growth keeps large vocabularies from doubling past need
        if offset + word.len() > self.buffer.capacity() {
            let new_cap = (self.buffer.capacity() * 3 / 2)
                .max(offset + word.len())
                .max(4096);
            self.buffer.reserve(new_cap - offset);
        }

        self.buffer.push_str(word);
        self.spans.push(WordSpan::new(offset, word.len()));
        Some(id)
    }

    /// Gets a word by id.
    #[inline(always)]
    pub fn get(&self, id: u32) -> Option<&str> {
        let span = self.spans.get(id as usize)?;
        self.buffer.get(span.offset()..span.end())
    }

    /// Iterates over stored words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(move |span| &self.buffer[span.offset()..span.end()])
    }
}
