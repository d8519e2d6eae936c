//! Corpus analysis binary.
//!
//! Cleans one or more book files into a normalized sentence corpus, builds
//! the vocabulary, one-hot encodes, and reports per-position statistics.
//! Prints a human-readable summary and writes the full statistics as JSON.

use bookprep::data::{merge_sources, SourceKind};
use bookprep::stats::{entropy_profile, position_frequent_words, FrequentWord, PositionReport};
use bookprep::{clean_sentences, CapitalizationTagger, CleanConfig, EncodingSummary, OneHot, Vocabulary};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bookprep-analyze",
    about = "Clean a book corpus and report positional one-hot statistics"
)]
struct Args {
    /// Input .txt book files, analyzed as one merged corpus
    #[arg(long, required = true, num_args = 1..)]
    books: Vec<PathBuf>,

    /// Treat input files as one sentence per line instead of prose
    #[arg(long, default_value_t = false)]
    lines: bool,

    /// Minimum cleaned sentence length (inclusive)
    #[arg(long, default_value_t = 3)]
    min_len: usize,

    /// Maximum cleaned sentence length (inclusive)
    #[arg(long, default_value_t = 15)]
    max_len: usize,

    /// Probability threshold for the per-position frequent-word report
    #[arg(long, default_value_t = 0.1)]
    threshold: f32,

    /// Output JSON report path
    #[arg(long, default_value = "data/output/positions.json")]
    report_file: PathBuf,
}

/// Full JSON report written for downstream display and plotting.
#[derive(Serialize)]
struct Report {
    summary: EncodingSummary,
    positions: Vec<PositionReport>,
    /// Frequent-word report per position, indexed by position.
    frequent_words: Vec<Vec<FrequentWord>>,
}

fn main() {
    let args = Args::parse();
    let kind = if args.lines {
        SourceKind::Lines
    } else {
        SourceKind::PlainText
    };

    let specs: Vec<_> = args.books.iter().map(|p| (p.clone(), kind)).collect();
    let raw = merge_sources(&specs).expect("Failed to load books");
    eprintln!(
        "Loaded {} raw sentences from {} book(s)",
        raw.len(),
        args.books.len()
    );

    let config = CleanConfig::new(args.min_len, args.max_len).expect("Invalid length bounds");
    let cleaned =
        clean_sentences(&raw, &config, &CapitalizationTagger).expect("bounds already validated");
    eprintln!(
        "Kept {} cleaned sentences with length in [{}, {}]",
        cleaned.len(),
        config.min_len,
        config.max_len
    );

    let vocab = Vocabulary::from_corpus(&cleaned);
    let title = args
        .books
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
        .collect::<Vec<_>>()
        .join("+");
    let encoding =
        OneHot::encode(&title, &cleaned, &vocab, &config).expect("Failed to encode corpus");

    let summary = encoding.summarize();
    println!("Book: {}", summary.book);
    println!("Number of sentences (N): {}", summary.sentences);
    println!("Vocabulary size (V): {}", summary.vocab_size);
    println!("Sentence length counts: {:?}", summary.length_counts);

    let positions = entropy_profile(&encoding);
    for report in &positions {
        println!(
            "position {:>3}: entropy {:>8.4} bits, dimensionality {:>10.2}, P(GAP) {:.4}",
            report.position, report.entropy, report.dimensionality, report.gap_probability
        );
    }

    let frequent_words: Vec<Vec<FrequentWord>> = (0..encoding.max_len())
        .map(|position| {
            position_frequent_words(&encoding, position, args.threshold)
                .expect("position is in range")
        })
        .collect();

    let report = Report {
        summary,
        positions,
        frequent_words,
    };
    if let Some(parent) = args.report_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create report directory");
    }
    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    fs::write(&args.report_file, json).expect("Failed to write report");
    eprintln!("Wrote report to {}", args.report_file.display());
}
