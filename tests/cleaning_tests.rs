//! Integration tests for the sentence cleaning pipeline.
//!
//! These verify the end-to-end cleaning guarantees:
//! - All cleaned sentences respect the configured length bounds
//! - Chapter markers and chapter-number headings are rejected
//! - Tokens are normalized (lower-cased, trimmed) or kept verbatim as proper nouns
//! - Re-cleaning a cleaned corpus is a no-op

use bookprep::clean::token::is_punct;
use bookprep::{clean_sentences, CleanConfig, CorpusError, PosTag, Tagger};

fn sent(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Deterministic fake: nothing is a proper noun.
struct PlainTagger;

impl Tagger for PlainTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        vec![PosTag::Other; tokens.len()]
    }
}

/// Deterministic fake: a fixed word list is tagged as proper nouns.
struct ListTagger(Vec<&'static str>);

impl Tagger for ListTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        tokens
            .iter()
            .map(|t| {
                if self.0.contains(&t.as_str()) {
                    PosTag::ProperSingular
                } else {
                    PosTag::Other
                }
            })
            .collect()
    }
}

#[test]
fn test_all_cleaned_sentences_respect_bounds() {
    let raw = vec![
        sent(&["one"]),
        sent(&["one", "two"]),
        sent(&["one", "two", "three"]),
        sent(&["one", "two", "three", "four"]),
        sent(&["one", "two", "three", "four", "five"]),
        sent(&["one", "two", "three", "four", "five", "six"]),
    ];
    let config = CleanConfig::new(2, 4).unwrap();
    let cleaned = clean_sentences(&raw, &config, &PlainTagger).unwrap();

    assert!(!cleaned.is_empty());
    for sentence in &cleaned {
        assert!(sentence.len() >= config.min_len);
        assert!(sentence.len() <= config.max_len);
    }
}

#[test]
fn test_chapter_literal_is_dropped_regardless_of_bounds() {
    let raw = vec![sent(&["CHAPTER"]), sent(&["CHAPTER", "the", "whale"])];
    let config = CleanConfig::new(1, 5).unwrap();
    let cleaned = clean_sentences(&raw, &config, &PlainTagger).unwrap();
    assert!(cleaned.is_empty());
}

#[test]
fn test_chapter_roman_heading_is_dropped() {
    // "long" and "enough" would pass on their own; the heading check drops
    // the whole sentence.
    let raw = vec![sent(&["chapter", "IV", "is", "long", "enough"])];
    let config = CleanConfig::new(1, 5).unwrap();
    let cleaned = clean_sentences(&raw, &config, &PlainTagger).unwrap();
    assert!(cleaned.is_empty());
}

#[test]
fn test_chapter_digit_heading_is_dropped() {
    let raw = vec![sent(&["Chapter", "42"])];
    let config = CleanConfig::new(1, 5).unwrap();
    assert!(clean_sentences(&raw, &config, &PlainTagger)
        .unwrap()
        .is_empty());
}

#[test]
fn test_chapter_as_ordinary_word_survives() {
    let raw = vec![sent(&["the", "chapter", "ended", "quietly"])];
    let config = CleanConfig::new(1, 5).unwrap();
    let cleaned = clean_sentences(&raw, &config, &PlainTagger).unwrap();
    assert_eq!(cleaned, vec![sent(&["the", "chapter", "ended", "quietly"])]);
}

#[test]
fn test_normalized_tokens_are_clean() {
    let raw = vec![sent(&[
        "The", "Whale", "--", "1851", "XIV", "_swam_", "onward", "!",
    ])];
    let config = CleanConfig::new(1, 8).unwrap();
    let cleaned = clean_sentences(&raw, &config, &ListTagger(vec!["Whale"])).unwrap();

    assert_eq!(cleaned.len(), 1);
    for token in &cleaned[0] {
        if token == "Whale" {
            continue; // kept verbatim as a proper noun
        }
        assert_eq!(token, &token.to_lowercase());
        let first = token.chars().next().unwrap();
        let last = token.chars().last().unwrap();
        assert!(!is_punct(first) && first != '_');
        assert!(!is_punct(last) && last != '_');
        if token.chars().count() == 1 {
            assert!(token == "a" || token == "i");
        }
    }
    assert_eq!(cleaned[0], sent(&["the", "Whale", "swam", "onward"]));
}

#[test]
fn test_proper_noun_keeps_case_and_underscores() {
    let raw = vec![sent(&["aboard", "the", "_Pequod_", "today"])];
    let config = CleanConfig::new(1, 5).unwrap();
    let cleaned = clean_sentences(&raw, &config, &ListTagger(vec!["_Pequod_"])).unwrap();
    assert_eq!(cleaned[0][2], "_Pequod_");
}

#[test]
fn test_recleaning_is_idempotent() {
    let raw = vec![
        sent(&["The", "Whale", "swam", "onward", "."]),
        sent(&["chapter", "IX"]),
        sent(&["It", "rained", "for", "40", "days", "!"]),
        sent(&["a", "I", "b", "c", "d"]),
    ];
    let config = CleanConfig::new(2, 5).unwrap();
    let once = clean_sentences(&raw, &config, &PlainTagger).unwrap();
    let twice = clean_sentences(&once, &config, &PlainTagger).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_malformed_bounds_are_rejected_up_front() {
    let raw = vec![sent(&["anything"])];
    let config = CleanConfig { min_len: 9, max_len: 3 };
    let err = clean_sentences(&raw, &config, &PlainTagger).unwrap_err();
    assert_eq!(err, CorpusError::InvalidBounds { min: 9, max: 3 });
}

#[test]
fn test_punctuation_only_sentences_filter_silently() {
    // Malformed input is a success path, not an error path.
    let raw = vec![sent(&["...", "!!!", "---"]), sent(&["fine", "words", "here"])];
    let config = CleanConfig::new(2, 4).unwrap();
    let cleaned = clean_sentences(&raw, &config, &PlainTagger).unwrap();
    assert_eq!(cleaned, vec![sent(&["fine", "words", "here"])]);
}
