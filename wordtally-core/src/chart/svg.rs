//! SVG Bar Chart
//!
//! Renders the top words as a standalone SVG document: bars on a grid with
//! integer count ticks, axis titles and rotated word labels. Markup is
//! written directly with [`core::fmt::Write`].

use core::fmt::Write;

use wordtally_types::{Result, TallyError, WordCount};

use super::{ChartConfig, ChartRenderer};

const MARGIN_LEFT: f32 = 60.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 90.0;
/// Fraction of each slot filled by its bar.
const BAR_FILL: f32 = 0.8;
const TARGET_TICKS: u64 = 5;

/// Vertical bar chart rendered as a standalone SVG document.
///
/// Words run along the horizontal axis with labels rotated by
/// [`ChartConfig::label_rotation`]; counts run up the vertical axis with
/// integer ticks.
#[derive(Debug, Clone, Default)]
pub struct SvgBarChart {
    config: ChartConfig,
}

impl SvgBarChart {
    /// Creates a chart with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

/// Integer tick step giving roughly [`TARGET_TICKS`] ticks up to `max`.
fn tick_step(max: u64) -> u64 {
    max.div_ceil(TARGET_TICKS).max(1)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl ChartRenderer for SvgBarChart {
    type Output = String;

    fn render(&self, bars: &[WordCount<'_>]) -> Result<String> {
        let cfg = &self.config;
        let width = cfg.width as f32;
        let height = cfg.height as f32;
        let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(TallyError::invalid_argument(format!(
                "chart canvas {}x{} is too small to hold a plot",
                cfg.width, cfg.height
            )));
        }

        let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
        let step = tick_step(max);
        let top = max.div_ceil(step).max(1) * step;
        let y_of = |value: u64| MARGIN_TOP + plot_h - (value as f32 / top as f32) * plot_h;
        let baseline = MARGIN_TOP + plot_h;

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = cfg.width,
            h = cfg.height
        );
        let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

        // Ticks and horizontal grid.
        let mut tick = 0;
        while tick <= top {
            let y = y_of(tick);
            let _ = writeln!(
                svg,
                r##"<line class="grid" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
                x1 = MARGIN_LEFT,
                x2 = MARGIN_LEFT + plot_w
            );
            let _ = writeln!(
                svg,
                r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle">{tick}</text>"#,
                x = MARGIN_LEFT - 6.0
            );
            tick += step;
        }

        if !bars.is_empty() {
            let slot = plot_w / bars.len() as f32;
            let bar_w = slot * BAR_FILL;
            for (i, bar) in bars.iter().enumerate() {
                let x = MARGIN_LEFT + slot * i as f32 + (slot - bar_w) / 2.0;
                let y = y_of(bar.count);
                let label = escape(bar.word);
                let _ = writeln!(
                    svg,
                    r##"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="#1f77b4"><title>{label}: {count}</title></rect>"##,
                    h = baseline - y,
                    count = bar.count
                );

                let cx = x + bar_w / 2.0;
                let ly = baseline + 14.0;
                let _ = writeln!(
                    svg,
                    r#"<text class="label" x="{cx:.1}" y="{ly:.1}" text-anchor="end" transform="rotate({rot} {cx:.1} {ly:.1})">{label}</text>"#,
                    rot = -cfg.label_rotation
                );
            }
        }

        // Axes.
        let _ = writeln!(
            svg,
            r#"<line class="axis" x1="{x:.1}" y1="{t:.1}" x2="{x:.1}" y2="{b:.1}" stroke="black"/>"#,
            x = MARGIN_LEFT,
            t = MARGIN_TOP,
            b = baseline
        );
        let _ = writeln!(
            svg,
            r#"<line class="axis" x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="black"/>"#,
            l = MARGIN_LEFT,
            r = MARGIN_LEFT + plot_w,
            b = baseline
        );

        // Axis titles.
        let _ = writeln!(
            svg,
            r#"<text class="x-title" x="{x:.1}" y="{y:.1}" text-anchor="middle">{label}</text>"#,
            x = MARGIN_LEFT + plot_w / 2.0,
            y = height - 8.0,
            label = escape(&cfg.x_label)
        );
        let ty = MARGIN_TOP + plot_h / 2.0;
        let _ = writeln!(
            svg,
            r#"<text class="y-title" x="16.0" y="{ty:.1}" text-anchor="middle" transform="rotate(-90 16.0 {ty:.1})">{label}</text>"#,
            label = escape(&cfg.y_label)
        );

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordtally_types::ErrorKind;

    fn render(bars: &[WordCount<'_>]) -> String {
        SvgBarChart::default().render(bars).unwrap()
    }

    #[test]
    fn is_a_standalone_document() {
        let svg = render(&[WordCount::new("the", 3)]);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn one_rect_and_label_per_bar() {
        let svg = render(&[
            WordCount::new("the", 3),
            WordCount::new("cat", 2),
            WordCount::new("sat", 1),
        ]);
        assert_eq!(svg.matches(r#"<rect class="bar""#).count(), 3);
        assert_eq!(svg.matches(r#"<text class="label""#).count(), 3);
        assert!(svg.contains(">the</text>"));
        assert!(svg.contains(">cat</text>"));
    }

    #[test]
    fn labels_rotated_counter_clockwise() {
        let svg = render(&[WordCount::new("word", 1)]);
        assert!(svg.contains("rotate(-45 "));
    }

    #[test]
    fn custom_rotation() {
        let chart = SvgBarChart::new(ChartConfig {
            label_rotation: 90.0,
            ..ChartConfig::default()
        });
        let svg = chart.render(&[WordCount::new("word", 1)]).unwrap();
        assert!(svg.contains(r#"<text class="label""#));
        assert!(!svg.contains("rotate(-45 "));
        assert_eq!(svg.matches("rotate(-90 ").count(), 2);
    }

    #[test]
    fn axis_titles_present() {
        let svg = render(&[WordCount::new("a", 1)]);
        assert!(svg.contains(">Word</text>"));
        assert!(svg.contains(">Count</text>"));
    }

    #[test]
    fn integer_ticks_cover_max() {
        let svg = render(&[WordCount::new("a", 7)]);
        // step 2 up to 8
        for tick in [0, 2, 4, 6, 8] {
            assert!(svg.contains(&format!(">{tick}</text>")), "tick {tick}");
        }
        assert!(!svg.contains(">10</text>"));
    }

    #[test]
    fn tick_step_values() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(3), 1);
        assert_eq!(tick_step(5), 1);
        assert_eq!(tick_step(7), 2);
        assert_eq!(tick_step(100), 20);
    }

    #[test]
    fn labels_escaped() {
        let svg = render(&[WordCount::new("<b>&", 1)]);
        assert!(svg.contains("&lt;b&gt;&amp;"));
        assert!(!svg.contains("<b>&"));
    }

    #[test]
    fn tallest_bar_reaches_top_tick() {
        let svg = render(&[WordCount::new("a", 5), WordCount::new("b", 1)]);
        // top tick is 5 -> y at plot top
        assert!(svg.contains(&format!(r#"y="{MARGIN_TOP:.1}" width="#)));
    }

    #[test]
    fn empty_bars_render_axes_only() {
        let svg = render(&[]);
        assert_eq!(svg.matches(r#"<rect class="bar""#).count(), 0);
        assert_eq!(svg.matches(r#"class="axis""#).count(), 2);
    }

    #[test]
    fn tiny_canvas_rejected() {
        let chart = SvgBarChart::new(ChartConfig {
            width: 50,
            height: 50,
            ..ChartConfig::default()
        });
        let err = chart.render(&[WordCount::new("a", 1)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
