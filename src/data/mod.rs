//! Sentence sources, corpus merging, and vocabulary management.
//!
//! ## Submodules
//!
//! - [`source`] — text loading, sentence splitting, word tokenization
//! - [`vocab`] — token vocabulary and index mapping

pub mod source;
pub mod vocab;

pub use source::{
    load_sentences, sentences_from_text, split_sentences, strip_gutenberg_markers, tokenize_words,
    SourceKind,
};
pub use vocab::{Vocabulary, GAP};

use std::path::PathBuf;

/// Merge several sources into one corpus.
///
/// Each source's internal sentence order is preserved and sources are
/// concatenated in the order given.
///
/// # Errors
///
/// Returns an error if any source file cannot be read.
pub fn merge_sources(specs: &[(PathBuf, SourceKind)]) -> Result<Vec<Vec<String>>, String> {
    let mut all = Vec::new();
    for (path, kind) in specs {
        let (_, sentences) = source::load_sentences(path, *kind)?;
        all.extend(sentences);
    }
    Ok(all)
}
