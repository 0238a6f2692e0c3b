//! Frequency table keyed by word, remembering first-occurrence order.

use core::hash::{Hash, Hasher};

use log::error;
use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;
use wordtally_types::{Result, TallyError, WordCount};

use crate::analyzer::{is_token, TextNormalizer, Tokenizer};
use crate::arena::WordArena;

/// Word ids sharing one hash. Collisions are rare, so one inline slot.
type Bucket = SmallVec<[u32; 1]>;

#[inline(always)]
fn hash_word(word: &str) -> u64 {
    let mut hasher = FxHasher::default();
    word.hash(&mut hasher);
    hasher.finish()
}

/// Mapping from token to occurrence count.
///
/// Distinct words live once in a [`WordArena`] in first-occurrence order,
/// counts live in a parallel vector, and a hash index maps word hashes to
/// arena ids. A word's id is therefore its first-occurrence rank, which is
/// what [`most_common`](Self::most_common) uses to break ties.
///
/// Equality ignores order: two tables are equal when they hold the same
/// words with the same counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    words: WordArena,
    counts: Vec<u64>,
    index: FxHashMap<u64, Bucket>,
    total: u64,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table sized for roughly `distinct` words.
    pub fn with_capacity(distinct: usize) -> Self {
        Self {
            words: WordArena::with_capacity(distinct * 8, distinct),
            counts: Vec::with_capacity(distinct),
            index: FxHashMap::with_capacity_and_hasher(distinct, Default::default()),
            total: 0,
        }
    }

    #[inline]
    fn find(&self, word: &str, hash: u64) -> Option<u32> {
        self.index
            .get(&hash)?
            .iter()
            .copied()
            .find(|&id| self.words.get(id) == Some(word))
    }

    /// Records one occurrence of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidArgument`] if `word` is not a cleaned
    /// token (see [`is_token`]) or the table already holds `u32::MAX + 1`
    /// distinct words. The table is unchanged in either case.
    pub fn add(&mut self, word: &str) -> Result<()> {
        if !is_token(word) {
            return Err(TallyError::invalid_argument(format!(
                "{word:?} is not a token: expected non-empty lowercase text without punctuation or whitespace"
            )));
        }
        self.record(word)
    }

    /// Records a token the tokenizer produced, skipping the token check.
    #[inline]
    pub(crate) fn record(&mut self, token: &str) -> Result<()> {
        debug_assert!(is_token(token), "frequency table: bad token {token:?}");

        let hash = hash_word(token);
        match self.find(token, hash) {
            Some(id) => self.counts[id as usize] += 1,
            None => {
                let id = self.words.push(token).ok_or_else(|| {
                    TallyError::invalid_argument("frequency table is full: too many distinct words")
                })?;
                self.counts.push(1);
                self.index.entry(hash).or_default().push(id);
            }
        }
        self.total += 1;
        Ok(())
    }

    /// Returns how many times `word` was seen (zero if never).
    #[inline]
    pub fn count(&self, word: &str) -> u64 {
        self.find(word, hash_word(word))
            .map_or(0, |id| self.counts[id as usize])
    }

    /// Returns `true` if `word` was seen at least once.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word, hash_word(word)).is_some()
    }

    /// Number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no word was recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    #[inline(always)]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterates over entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = WordCount<'_>> + '_ {
        self.words
            .iter()
            .zip(self.counts.iter().copied())
            .map(|(word, count)| WordCount::new(word, count))
    }

    /// Returns the `k` entries with the largest counts.
    ///
    /// Ordered by count descending; ties keep first-occurrence order. A `k`
    /// larger than [`len`](Self::len) yields every entry.
    pub fn most_common(&self, k: usize) -> Vec<WordCount<'_>> {
        let k = k.min(self.len());
        if k == 0 {
            return Vec::new();
        }

        // (count desc, id asc) is a total order, so unstable selection and
        // sorting are still deterministic.
        let rank = |&id: &u32| (core::cmp::Reverse(self.counts[id as usize]), id);
        // The arena hands out at most u32::MAX + 1 ids, all below len.
        let mut ids: Vec<u32> = (0..=u32::MAX).take(self.len()).collect();
        if k < ids.len() {
            ids.select_nth_unstable_by_key(k - 1, rank);
            ids.truncate(k);
        }
        ids.sort_unstable_by_key(rank);

        ids.into_iter()
            .filter_map(|id| {
                let word = self.words.get(id)?;
                Some(WordCount::new(word, self.counts[id as usize]))
            })
            .collect()
    }

    /// Removes every entry, keeping allocations.
    pub fn clear(&mut self) {
        self.words.clear();
        self.counts.clear();
        self.index.clear();
        self.total = 0;
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.total == other.total
            && self.iter().all(|entry| other.count(entry.word) == entry.count)
    }
}

impl Eq for FrequencyTable {}

/// Each item is raw text: it is cleaned and split like file contents, so
/// `"Bang!"` counts as `bang` and `"two words"` as two tokens.
impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, texts: I) {
        let normalizer = TextNormalizer::new();
        let tokenizer = Tokenizer::new();
        let mut cleaned = String::new();

        for text in texts {
            normalizer.normalize_into(text, &mut cleaned);
            for token in tokenizer.tokens(&cleaned) {
                if let Err(err) = self.record(token) {
                    error!("{err}");
                    return;
                }
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(texts: I) -> Self {
        let mut table = Self::new();
        table.extend(texts);
        table
    }
}
