//! Sentence sources: boilerplate stripping, sentence splitting, word
//! tokenization, and file loading.
//!
//! The cleaning pipeline consumes ordered sequences of raw word tokens; this
//! module produces them from plain-text book files.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("word pattern compiles");
}

/// How a source file's text is divided into sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Prose: strip Gutenberg boilerplate, then split on sentence terminators.
    PlainText,
    /// One sentence per line, already segmented upstream.
    Lines,
}

/// Strip Project Gutenberg header and footer boilerplate.
///
/// Returns the content after the `*** START OF` marker line and before the
/// `*** END OF` marker, falling back to the full text when a marker is
/// missing.
#[must_use]
pub fn strip_gutenberg_markers(text: &str) -> &str {
    let body = text
        .find("*** START OF")
        .and_then(|pos| text[pos..].find('\n').map(|nl| &text[pos + nl + 1..]))
        .unwrap_or(text);
    match body.find("*** END OF") {
        Some(end) => &body[..end],
        None => body,
    }
}

/// Split UTF-8 text into sentence strings on terminator characters
/// (`.`, `!`, `?`). Empty segments are discarded.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract maximal runs of word characters from a sentence string.
#[must_use]
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    WORD_RE
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split raw prose into word-tokenized sentences.
#[must_use]
pub fn sentences_from_text(text: &str) -> Vec<Vec<String>> {
    split_sentences(text)
        .iter()
        .map(|s| tokenize_words(s))
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Load a book file and return its name and word-tokenized sentences.
///
/// The name is derived from the file stem.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_sentences(
    path: &Path,
    kind: SourceKind,
) -> Result<(String, Vec<Vec<String>>), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    let sentences = match kind {
        SourceKind::PlainText => sentences_from_text(strip_gutenberg_markers(&raw)),
        SourceKind::Lines => raw
            .lines()
            .map(tokenize_words)
            .filter(|tokens| !tokens.is_empty())
            .collect(),
    };

    Ok((name, sentences))
}
