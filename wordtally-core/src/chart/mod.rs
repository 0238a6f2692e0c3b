//! Bar charts of the most frequent words.
//!
//! Rendering sits behind [`ChartRenderer`] so the tally pipeline never
//! depends on a particular output format. [`plot_words`] does the argument
//! checking and top-N selection, then hands the bars to a renderer.
//!
//! Two renderers ship with the crate:
//! - [`TextBarChart`]: one line per word, for terminals
//! - [`SvgBarChart`]: a standalone SVG document with rotated word labels

mod svg;
mod text;

pub use svg::SvgBarChart;
pub use text::TextBarChart;

use wordtally_types::{Result, TallyError, TopN, WordCount};

use crate::tally::FrequencyTable;

/// Chart appearance options shared by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Horizontal axis title.
    pub x_label: String,
    /// Vertical axis title.
    pub y_label: String,
    /// Counter-clockwise rotation of word labels, in degrees.
    pub label_rotation: f32,
    /// SVG canvas width in pixels.
    pub width: u32,
    /// SVG canvas height in pixels.
    pub height: u32,
    /// Terminal columns used by the longest bar.
    pub bar_width: usize,
    /// Terminal bar glyph.
    pub glyph: char,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_label: "Word".to_owned(),
            y_label: "Count".to_owned(),
            label_rotation: 45.0,
            width: 640,
            height: 480,
            bar_width: 40,
            glyph: '#',
        }
    }
}

/// Turns ranked bars into some visual artifact.
pub trait ChartRenderer {
    /// What rendering produces.
    type Output;

    /// Renders `bars`, already ordered from most to least frequent.
    fn render(&self, bars: &[WordCount<'_>]) -> Result<Self::Output>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &R {
    type Output = R::Output;

    fn render(&self, bars: &[WordCount<'_>]) -> Result<Self::Output> {
        (**self).render(bars)
    }
}

/// Selects exactly `n` most frequent words.
///
/// # Errors
///
/// Returns [`TallyError::InvalidArgument`] if `n` exceeds the number of
/// distinct words in `table`.
pub fn top_words(table: &FrequencyTable, n: TopN) -> Result<Vec<WordCount<'_>>> {
    if n.get() > table.len() {
        return Err(TallyError::invalid_argument(format!(
            "cannot select the top {} words from a table of {} distinct words",
            n,
            table.len()
        )));
    }
    Ok(table.most_common(n.get()))
}

/// Renders the `n` most frequent words of `table`.
///
/// Ties are broken by first occurrence in the source text.
///
/// # Errors
///
/// Returns [`TallyError::InvalidArgument`] if `n` is not positive or exceeds
/// the number of distinct words. Renderer failures propagate unchanged.
pub fn plot_words<R: ChartRenderer>(
    table: &FrequencyTable,
    n: i64,
    renderer: &R,
) -> Result<R::Output> {
    let n = TopN::new(n)?;
    let bars = top_words(table, n)?;
    renderer.render(&bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordtally_types::ErrorKind;

    /// Hands the selected bars back as owned pairs.
    struct Capture;

    impl ChartRenderer for Capture {
        type Output = Vec<(String, u64)>;

        fn render(&self, bars: &[WordCount<'_>]) -> Result<Self::Output> {
            Ok(bars.iter().map(|b| (b.word.to_owned(), b.count)).collect())
        }
    }

    fn sample() -> FrequencyTable {
        "the cat sat on the mat the cat ran"
            .split_whitespace()
            .collect()
    }

    #[test]
    fn plots_top_n_in_rank_order() {
        let bars = plot_words(&sample(), 3, &Capture).unwrap();
        assert_eq!(
            bars,
            [
                ("the".to_owned(), 3),
                ("cat".to_owned(), 2),
                ("sat".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn all_entries_allowed() {
        let bars = plot_words(&sample(), 6, &Capture).unwrap();
        assert_eq!(bars.len(), 6);
        let words: Vec<_> = bars.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, ["the", "cat", "sat", "on", "mat", "ran"]);
    }

    #[test]
    fn zero_and_negative_n_rejected() {
        for n in [0, -1, -100] {
            let err = plot_words(&sample(), n, &Capture).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "n = {n}");
        }
    }

    #[test]
    fn n_beyond_distinct_words_rejected() {
        let err = plot_words(&sample(), 7, &Capture).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_table_rejects_any_n() {
        let err = plot_words(&FrequencyTable::new(), 1, &Capture).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn top_words_selects_exactly_n() {
        let table = sample();
        let top = top_words(&table, TopN::new(2).unwrap()).unwrap();
        assert_eq!(top, [WordCount::new("the", 3), WordCount::new("cat", 2)]);
    }

    #[test]
    fn default_config_matches_reference_rendering() {
        let config = ChartConfig::default();
        assert_eq!(config.x_label, "Word");
        assert_eq!(config.y_label, "Count");
        assert_eq!(config.label_rotation, 45.0);
    }
}
