//! Summary statistics for a frequency table.

use super::table::FrequencyTable;

/// Summary of a tallied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyStats {
    /// Number of tokens counted.
    pub total_tokens: u64,
    /// Number of distinct words.
    pub distinct_words: usize,
    /// Words that occur exactly once.
    pub hapax_legomena: usize,
    /// Highest single-word count (zero for an empty table).
    pub max_count: u64,
}

impl TallyStats {
    /// Computes stats from a table.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let (hapax_legomena, max_count) = table
            .iter()
            .fold((0usize, 0u64), |(hapax, max), entry| {
                (hapax + usize::from(entry.count == 1), max.max(entry.count))
            });

        Self {
            total_tokens: table.total(),
            distinct_words: table.len(),
            hapax_legomena,
            max_count,
        }
    }

    /// Distinct words divided by total tokens (zero for an empty table).
    pub fn type_token_ratio(&self) -> f64 {
        if self.total_tokens == 0 {
            0.0
        } else {
            self.distinct_words as f64 / self.total_tokens as f64
        }
    }
}

impl core::fmt::Display for TallyStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct words, {} hapax",
            self.total_tokens, self.distinct_words, self.hapax_legomena
        )?;

        if self.total_tokens > 0 {
            write!(
                f,
                ", max count {}, type/token {:.3}",
                self.max_count,
                self.type_token_ratio()
            )?;
        }

        Ok(())
    }
}
