//! Sentence filtering and cleaning.
//!
//! Turns raw sentence-tokenized text into a normalized corpus whose sentences
//! all satisfy the configured length bounds.
//!
//! ## Submodules
//!
//! - [`roman`] — Roman-numeral classification
//! - [`tag`] — part-of-speech tagger capability
//! - [`token`] — single-token normalization rules

pub mod roman;
pub mod tag;
pub mod token;

pub use roman::is_roman;
pub use tag::{CapitalizationTagger, PosTag, Tagger};
pub use token::normalize_token;

use crate::{CleanConfig, CorpusResult};

/// Clean a raw corpus into sentences within the configured bounds.
///
/// Per sentence, in order:
/// 1. discard if the raw token count is outside `[min_len, max_len + 1]`
///    (the `+ 1` admits sentences that shrink by one token when a chapter
///    heading is removed);
/// 2. discard if any token equals the literal `CHAPTER`;
/// 3. discard chapter-number headings: a case-insensitive `chapter` token
///    immediately followed by an all-digit token or a multi-character Roman
///    numeral;
/// 4. tag the surviving tokens with the injected tagger;
/// 5. normalize each tagged token via [`token::normalize_token`];
/// 6. keep the result iff `min_len <= length <= max_len`. Sentences outside
///    the bounds are discarded whole, never truncated.
///
/// Malformed text is a success path: punctuation-only and empty sentences are
/// simply filtered out. An empty input yields an empty output.
///
/// # Errors
///
/// Returns `InvalidBounds` if `config.min_len > config.max_len`; the bounds
/// are rejected before any filtering begins.
pub fn clean_sentences(
    sentences: &[Vec<String>],
    config: &CleanConfig,
    tagger: &dyn Tagger,
) -> CorpusResult<Vec<Vec<String>>> {
    config.validate()?;

    let mut cleaned = Vec::new();
    for sentence in sentences {
        if sentence.len() < config.min_len || sentence.len() > config.max_len + 1 {
            continue;
        }
        if sentence.iter().any(|t| t == "CHAPTER") {
            continue;
        }
        if is_chapter_heading(sentence) {
            continue;
        }

        let tags = tagger.tag(sentence);
        let clean: Vec<String> = sentence
            .iter()
            .zip(tags)
            .filter_map(|(word, tag)| token::normalize_token(word, tag))
            .collect();

        if clean.len() >= config.min_len && clean.len() <= config.max_len {
            cleaned.push(clean);
        }
    }
    Ok(cleaned)
}

/// A sentence is a chapter-number heading when its first case-insensitive
/// `chapter` token is immediately followed by an all-digit token or a Roman
/// numeral longer than one character. Single characters like `I` are too
/// ambiguous with the pronoun to count.
fn is_chapter_heading(sentence: &[String]) -> bool {
    let Some(i) = sentence
        .iter()
        .position(|t| t.eq_ignore_ascii_case("chapter"))
    else {
        return false;
    };
    match sentence.get(i + 1) {
        Some(next) => {
            let all_digits = !next.is_empty() && next.chars().all(|c| c.is_ascii_digit());
            let multi_char_roman = next.chars().count() > 1 && is_roman(next);
            all_digits || multi_char_roman
        }
        None => false,
    }
}
