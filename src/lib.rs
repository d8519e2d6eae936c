//! # bookprep
//!
//! Prepares natural-language book text for positional statistics: cleans
//! sentence-tokenized text into a normalized corpus, builds a fixed
//! vocabulary, encodes sentences as positional one-hot tensors, and computes
//! per-position probability, entropy, and dimensionality measures.
//!
//! ## Structure
//!
//! - [`clean`] — sentence filtering and token normalization rules
//! - [`data`] — sentence sources, corpus merging, vocabulary management
//! - [`encode`] — one-hot tensor construction
//! - [`stats`] — per-position marginals, entropy, and frequent-word reports
//!
//! The pipeline is a single-pass batch transform: raw sentences are cleaned
//! under inclusive length bounds, the cleaned corpus fixes a vocabulary, and
//! the `(sentence, position, vocabulary index)` tensor drives all downstream
//! statistics. The tensor is read-only once built.

pub mod clean;
pub mod data;
pub mod encode;
pub mod stats;

pub use clean::{clean_sentences, CapitalizationTagger, PosTag, Tagger};
pub use data::vocab::{Vocabulary, GAP};
pub use encode::{EncodingSummary, OneHot};
pub use stats::{entropy_profile, position_frequent_words, position_marginals};

use std::error::Error;
use std::fmt;

/// Error type for corpus operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Minimum sentence length exceeds the maximum.
    InvalidBounds { min: usize, max: usize },
    /// Position argument outside the valid `[0, max_len)` range.
    PositionOutOfRange { position: usize, max_len: usize },
    /// A token was encountered that is absent from the vocabulary.
    UnknownWord { word: String, sentence: usize },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min length {min} exceeds max length {max}")
            }
            CorpusError::PositionOutOfRange { position, max_len } => {
                write!(
                    f,
                    "Position {position} is outside the sentence position range 0-{}",
                    max_len.saturating_sub(1)
                )
            }
            CorpusError::UnknownWord { word, sentence } => {
                write!(f, "Word '{word}' in sentence {sentence} is not in the vocabulary")
            }
        }
    }
}

impl Error for CorpusError {}

pub type CorpusResult<T> = Result<T, CorpusError>;

/// Inclusive sentence length bounds shared by cleaning and encoding.
///
/// Every cleaned sentence satisfies `min_len <= length <= max_len`, and
/// `max_len` fixes the position axis of the one-hot tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl CleanConfig {
    /// Create validated length bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `min_len > max_len`.
    pub fn new(min_len: usize, max_len: usize) -> CorpusResult<Self> {
        let config = Self { min_len, max_len };
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds are well-formed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `min_len > max_len`.
    pub fn validate(&self) -> CorpusResult<()> {
        if self.min_len > self.max_len {
            return Err(CorpusError::InvalidBounds {
                min: self.min_len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 15,
        }
    }
}
