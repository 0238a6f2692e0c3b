//! Terminal bar chart.
//!
//! One line per word: the label padded to the widest word, a bar of glyphs
//! scaled against the largest count, then the count itself.

use core::fmt::Write;

use wordtally_types::{Result, WordCount};

use super::{ChartConfig, ChartRenderer};

/// Horizontal bar chart drawn with a repeated glyph.
///
/// ```text
/// Word | Count
/// the  | ######################################## 3
/// cat  | ########################### 2
/// sat  | ############## 1
/// ```
///
/// The longest bar spans [`ChartConfig::bar_width`] columns; every non-zero
/// count gets at least one glyph.
#[derive(Debug, Clone, Default)]
pub struct TextBarChart {
    config: ChartConfig,
}

impl TextBarChart {
    /// Creates a chart with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    fn bar_len(&self, count: u64, max: u64) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        let width = self.config.bar_width.max(1) as u64;
        (count.saturating_mul(width).div_ceil(max)).max(1) as usize
    }
}

impl ChartRenderer for TextBarChart {
    type Output = String;

    fn render(&self, bars: &[WordCount<'_>]) -> Result<String> {
        let label_width = bars
            .iter()
            .map(|b| b.word.chars().count())
            .chain(core::iter::once(self.config.x_label.chars().count()))
            .max()
            .unwrap_or(0);
        let max = bars.iter().map(|b| b.count).max().unwrap_or(0);

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<label_width$} | {}",
            self.config.x_label, self.config.y_label
        );

        let glyph = self.config.glyph.to_string();
        for bar in bars {
            let _ = writeln!(
                out,
                "{:<label_width$} | {} {}",
                bar.word,
                glyph.repeat(self.bar_len(bar.count, max)),
                bar.count
            );
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<WordCount<'static>> {
        vec![
            WordCount::new("the", 3),
            WordCount::new("cat", 2),
            WordCount::new("sat", 1),
        ]
    }

    #[test]
    fn one_line_per_bar_plus_header() {
        let out = TextBarChart::default().render(&bars()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Word | Count");
        assert!(lines[1].starts_with("the  | "));
        assert!(lines[1].ends_with(" 3"));
    }

    #[test]
    fn longest_bar_spans_configured_width() {
        let chart = TextBarChart::new(ChartConfig {
            bar_width: 10,
            ..ChartConfig::default()
        });
        let out = chart.render(&bars()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "the  | ########## 3");
        assert_eq!(lines[2], "cat  | ####### 2");
        assert_eq!(lines[3], "sat  | #### 1");
    }

    #[test]
    fn small_counts_still_visible() {
        let chart = TextBarChart::new(ChartConfig {
            bar_width: 5,
            ..ChartConfig::default()
        });
        let out = chart
            .render(&[WordCount::new("big", 1000), WordCount::new("tiny", 1)])
            .unwrap();
        assert!(out.lines().nth(2).unwrap().contains("| # 1"));
    }

    #[test]
    fn custom_glyph() {
        let chart = TextBarChart::new(ChartConfig {
            bar_width: 3,
            glyph: '█',
            ..ChartConfig::default()
        });
        let out = chart.render(&[WordCount::new("a", 2)]).unwrap();
        assert!(out.contains("███ 2"));
    }

    #[test]
    fn pads_unicode_labels_by_chars() {
        let out = TextBarChart::default()
            .render(&[WordCount::new("café", 1), WordCount::new("a", 1)])
            .unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[1].starts_with("café | "));
        assert!(lines[2].starts_with("a    | "));
    }

    #[test]
    fn empty_renders_header_only() {
        let out = TextBarChart::default().render(&[]).unwrap();
        assert_eq!(out, "Word | Count\n");
    }
}
