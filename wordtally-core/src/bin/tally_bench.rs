//! Tally Throughput Benchmark
//!
//! Measures the word-count pipeline on a large text file (a book, a
//! Wikipedia dump) to get realistic throughput numbers.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: lowercasing and punctuation deletion
//! 2. **Tokenize**: whitespace splitting of the cleaned text
//! 3. **Tally**: normalize + tokenize + counting into a frequency table
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/tally_bench /path/to/book.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Tally ===
//! --------------------------------
//! Mode        : Tally
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Tokens      : 15_489_234
//! Tokens/sec  : 34_265_478
//! --------------------------------
//! ```
//!
//! Build with `--release`; use an input of 100MB+ for stable numbers.

use std::env;
use std::time::{Duration, Instant};

use wordtally_core::{load_text_file, FileMode, TallyStats, TextNormalizer, Tokenizer, WordTally};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> wordtally_core::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tally_bench <path>");
        std::process::exit(1);
    }

    let path = &args[1];

    println!("Loading file...");
    let input = load_text_file(path, FileMode::Read)?;
    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    let cleaned = bench_normalize(&input);
    bench_tokenize(&cleaned);
    bench_tally(&input)
}

fn bench_normalize(input: &str) -> String {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
    out
}

fn bench_tokenize(cleaned: &str) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(tokenizer.count(cleaned));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = tokenizer.count(cleaned) as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", cleaned.len(), elapsed, tokens);
}

fn bench_tally(input: &str) -> wordtally_core::Result<()> {
    let tally = WordTally::new();

    println!("=== Tally ===");

    warmup(|| {
        std::hint::black_box(tally.count_text(input));
    });

    // Surface a tally failure once, before timing.
    tally.count_text(input)?;

    let mut stats = None;
    let elapsed = measure(|| {
        if let Ok(table) = tally.count_text(input) {
            stats = Some(TallyStats::from_table(&table));
            std::hint::black_box(&table);
        }
    });

    let tokens = stats.map_or(0, |s| s.total_tokens);
    print_perf("Tally", input.len(), elapsed, tokens);
    if let Some(stats) = stats {
        println!("Summary     : {}\n", stats);
    }
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
