//! Positional one-hot encoding of a cleaned corpus.
//!
//! An encoding is a 3-axis indicator tensor indexed by
//! `(sentence i, position j, vocabulary index k)`. For every `(i, j)` exactly
//! one `k` holds a 1: the index of the word at that position, or the `GAP`
//! index when the sentence has fewer than `j + 1` words. The flattened view
//! collapses the last two axes row-major (`j * V + k`) and is what the
//! positional statistics consume.
//!
//! Memory grows as `N * L * V` f32 entries; a few thousand sentences over a
//! book-sized vocabulary is tens of millions of entries, so encode bounded
//! corpora.

use crate::data::vocab::Vocabulary;
use crate::{CleanConfig, CorpusError, CorpusResult};
use ndarray::{Array3, ArrayView2};
use serde::Serialize;
use std::collections::BTreeMap;

/// One-hot encoding of a cleaned corpus against a fixed vocabulary.
///
/// Immutable once constructed; all statistics are pure functions of it.
#[derive(Debug, Clone)]
pub struct OneHot {
    book: String,
    sentences: Vec<Vec<String>>,
    vocab: Vocabulary,
    max_len: usize,
    tensor: Array3<f32>,
}

/// Serializable description of an encoding, for the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct EncodingSummary {
    pub book: String,
    pub sentences: usize,
    pub vocab_size: usize,
    pub max_len: usize,
    /// `(sentence length, count)` pairs ordered by increasing length.
    pub length_counts: Vec<(usize, usize)>,
}

impl OneHot {
    /// Encode a cleaned corpus as an `N x L x V` indicator tensor.
    ///
    /// For sentence `i` and position `j < length(i)`, the entry at the word's
    /// vocabulary index is set to 1; positions past the sentence end get a 1
    /// at the `GAP` index. Everything else stays 0.
    ///
    /// # Errors
    ///
    /// - `InvalidBounds` if the config's bounds are inverted.
    /// - `UnknownWord` if a sentence contains a token absent from `vocab`.
    ///   Encoding fails fast; unknown tokens are never mapped to `GAP` or
    ///   skipped, since either would corrupt the one-hot invariant.
    /// - `PositionOutOfRange` if a sentence is longer than `config.max_len`.
    pub fn encode(
        book: &str,
        sentences: &[Vec<String>],
        vocab: &Vocabulary,
        config: &CleanConfig,
    ) -> CorpusResult<Self> {
        config.validate()?;

        let n = sentences.len();
        let l = config.max_len;
        let v = vocab.size();
        let gap = vocab.gap_index();

        let mut tensor = Array3::zeros((n, l, v));
        for (i, sentence) in sentences.iter().enumerate() {
            if sentence.len() > l {
                return Err(CorpusError::PositionOutOfRange {
                    position: sentence.len() - 1,
                    max_len: l,
                });
            }
            for (j, word) in sentence.iter().enumerate() {
                let k = vocab
                    .word_to_index(word)
                    .ok_or_else(|| CorpusError::UnknownWord {
                        word: word.clone(),
                        sentence: i,
                    })?;
                tensor[[i, j, k]] = 1.0;
            }
            for j in sentence.len()..l {
                tensor[[i, j, gap]] = 1.0;
            }
        }

        Ok(Self {
            book: book.to_string(),
            sentences: sentences.to_vec(),
            vocab: vocab.clone(),
            max_len: l,
            tensor,
        })
    }

    /// Title of the encoded corpus.
    #[must_use]
    pub fn book(&self) -> &str {
        &self.book
    }

    /// Number of encoded sentences (N).
    #[must_use]
    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Position-axis length (L).
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Vocabulary-axis length (V).
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.size()
    }

    /// The vocabulary this corpus was encoded against.
    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The full `N x L x V` indicator tensor.
    #[must_use]
    pub fn tensor(&self) -> &Array3<f32> {
        &self.tensor
    }

    /// Flattened `N x (L * V)` view, collapsing the position and vocabulary
    /// axes row-major: column `j * V + k` is position `j`, index `k`.
    #[must_use]
    pub fn flat(&self) -> ArrayView2<'_, f32> {
        let (n, l, v) = self.tensor.dim();
        self.tensor
            .view()
            .into_shape((n, l * v))
            .expect("owned one-hot tensor is contiguous in standard order")
    }

    /// Frequency of cleaned (pre-padding) sentence lengths, ordered by
    /// increasing length.
    #[must_use]
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for sentence in &self.sentences {
            *counts.entry(sentence.len()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// Summarize the encoding for display or serialization.
    #[must_use]
    pub fn summarize(&self) -> EncodingSummary {
        EncodingSummary {
            book: self.book.clone(),
            sentences: self.num_sentences(),
            vocab_size: self.vocab_size(),
            max_len: self.max_len,
            length_counts: self.length_histogram(),
        }
    }
}
