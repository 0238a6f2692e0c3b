//! wordtally CLI
//!
//! Counts the words in a text file and prints the most frequent ones as a
//! terminal bar chart, JSON, or an SVG document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{error, info};
use serde::Serialize;
use wordtally_core::{
    plot_words, top_words, ChartConfig, ErrorKind, FrequencyTable, Result, SvgBarChart,
    TallyError, TallyStats, TextBarChart, TopN, WordTally,
};

/// Words shown when `--top` is not given.
const DEFAULT_TOP: usize = 10;

#[derive(Parser)]
#[command(name = "wordtally")]
#[command(version)]
#[command(about = "Word frequency counter", long_about = None)]
struct Cli {
    /// Text file to analyze
    path: PathBuf,

    /// Number of most frequent words to show; must not exceed the number of
    /// distinct words [default: 10, or every word if there are fewer]
    #[arg(short = 'n', long, value_parser = parse_top, allow_negative_numbers = true)]
    top: Option<TopN>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print summary statistics
    #[arg(long)]
    stats: bool,

    /// Terminal columns used by the longest bar
    #[arg(long, default_value = "40")]
    bar_width: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Horizontal bars drawn with '#'
    Text,
    /// JSON array of {"word", "count"} objects
    Json,
    /// SVG bar chart with rotated labels
    Svg,
}

#[derive(Serialize)]
struct Row<'a> {
    word: &'a str,
    count: u64,
}

fn parse_top(s: &str) -> Result<TopN> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        // I/O failures were already logged where they happened.
        if e.kind() == ErrorKind::InvalidArgument {
            error!("{e}");
        }
        std::process::exit(1);
    }
}

/// Picks how many words to show: the explicit `--top`, or the default capped
/// at the table size.
fn resolve_top(top: Option<TopN>, table: &FrequencyTable) -> Result<TopN> {
    match top {
        Some(n) => Ok(n),
        None => TopN::new(DEFAULT_TOP.min(table.len()).max(1) as i64),
    }
}

/// Pretty-prints `value` as JSON with a trailing newline.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        TallyError::invalid_argument(format!("cannot encode output as JSON: {e}"))
    })?;
    json.push('\n');
    Ok(json)
}

fn run(cli: &Cli, stdout: &mut impl Write) -> Result<()> {
    let table = WordTally::new().count_words(&cli.path)?;
    info!(
        "Counted {} tokens ({} distinct) in {}",
        table.total(),
        table.len(),
        cli.path.display()
    );

    let console_error = |e: io::Error| {
        let err = TallyError::from_io(Path::new("<stdout>"), e);
        error!("{err}");
        err
    };

    if cli.stats {
        writeln!(stdout, "{}", TallyStats::from_table(&table)).map_err(console_error)?;
    }

    let config = ChartConfig {
        bar_width: cli.bar_width,
        ..ChartConfig::default()
    };
    let top = resolve_top(cli.top, &table)?;
    let n = top.get() as i64;

    let rendered = match cli.format {
        Format::Text => plot_words(&table, n, &TextBarChart::new(config))?,
        Format::Svg => plot_words(&table, n, &SvgBarChart::new(config))?,
        Format::Json => {
            let rows: Vec<Row<'_>> = top_words(&table, top)?
                .into_iter()
                .map(|entry| Row {
                    word: entry.word,
                    count: entry.count,
                })
                .collect();
            to_json(&rows)?
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| {
                let err = TallyError::from_io(path, e);
                error!("{err}");
                err
            })?;
            info!("Wrote top {} chart to {}", top, path.display());
        }
        None => stdout.write_all(rendered.as_bytes()).map_err(console_error)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::{tempdir, TempDir};

    const SAMPLE: &str = "the cat sat on the mat. The cat ran.";

    fn sample_dir() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sample.txt");
        fs::write(&input, SAMPLE).unwrap();
        (dir, input)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordtally").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wordtally", "book.txt"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("book.txt"));
        assert!(cli.top.is_none());
        assert_eq!(cli.format, Format::Text);
        assert!(cli.output.is_none());
    }

    #[test]
    fn top_must_be_positive_integer() {
        for bad in ["0", "-1", "2.5", "many"] {
            assert!(
                Cli::try_parse_from(["wordtally", "book.txt", "-n", bad]).is_err(),
                "accepted {bad}"
            );
        }
        let cli = Cli::try_parse_from(["wordtally", "book.txt", "--top", "3"]).unwrap();
        assert_eq!(cli.top.map(TopN::get), Some(3));
    }

    #[test]
    fn format_values() {
        let cli = Cli::try_parse_from(["wordtally", "b.txt", "-f", "svg"]).unwrap();
        assert_eq!(cli.format, Format::Svg);
        let cli = Cli::try_parse_from(["wordtally", "b.txt", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn json_written_to_output_file() {
        let (dir, input) = sample_dir();
        let output = dir.path().join("top.json");
        let cli = cli(&[
            input.to_str().unwrap(),
            "-n",
            "3",
            "-f",
            "json",
            "-o",
            output.to_str().unwrap(),
        ]);

        let mut stdout = Vec::new();
        run(&cli, &mut stdout).unwrap();
        assert!(stdout.is_empty());

        let written = fs::read_to_string(&output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"word": "the", "count": 3},
                {"word": "cat", "count": 2},
                {"word": "sat", "count": 1},
            ])
        );
    }

    #[test]
    fn default_top_covers_small_vocabulary() {
        let (_dir, input) = sample_dir();
        let cli = cli(&[input.to_str().unwrap(), "-f", "json"]);

        let mut stdout = Vec::new();
        run(&cli, &mut stdout).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        let words: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["word"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(words, ["the", "cat", "sat", "on", "mat", "ran"]);
    }

    #[test]
    fn explicit_top_above_vocabulary_is_rejected() {
        let (_dir, input) = sample_dir();
        let cli = cli(&[input.to_str().unwrap(), "-n", "7"]);

        let err = run(&cli, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn stats_line_precedes_chart() {
        let (_dir, input) = sample_dir();
        let cli = cli(&[input.to_str().unwrap(), "--stats", "-n", "2"]);

        let mut stdout = Vec::new();
        run(&cli, &mut stdout).unwrap();

        let text = String::from_utf8(stdout).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("9 tokens, 6 distinct words"), "{}", lines[0]);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("the"));
        assert!(lines[3].starts_with("cat"));
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let cli = cli(&[missing.to_str().unwrap()]);

        let mut stdout = Vec::new();
        let err = run(&cli, &mut stdout).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(stdout.is_empty());
    }

    #[test]
    fn resolve_top_caps_only_the_default() {
        let table: FrequencyTable = ["a b c"].into_iter().collect();
        assert_eq!(resolve_top(None, &table).unwrap().get(), 3);
        assert_eq!(resolve_top(None, &FrequencyTable::new()).unwrap().get(), 1);

        let explicit = TopN::new(5).unwrap();
        assert_eq!(resolve_top(Some(explicit), &table).unwrap().get(), 5);
    }

    #[test]
    fn json_encoding_failure_is_invalid_argument() {
        use std::collections::BTreeMap;

        let mut keyed = BTreeMap::new();
        keyed.insert((1u8, 2u8), 3u64);
        let err = to_json(&keyed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.path().is_none());

        assert_eq!(to_json(&[1, 2]).unwrap(), "[\n  1,\n  2\n]\n");
    }
}
