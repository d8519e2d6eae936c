//! Corpus vocabulary with a reserved padding symbol.
//!
//! Maps between normalized tokens and dense indices for one-hot encoding.

use std::collections::{BTreeSet, HashMap};

/// Reserved padding symbol marking an absent word at a sentence position.
pub const GAP: &str = "GAP";

/// Sorted token vocabulary with a bijective word ↔ index mapping.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Words in lexicographic order; the index of a word is its position here.
    words: Vec<String>,
    /// Reverse mapping from word to index.
    word_to_idx: HashMap<String, usize>,
    /// Cached index of the [`GAP`] symbol.
    gap_idx: usize,
}

impl Vocabulary {
    /// Build the vocabulary of a cleaned corpus.
    ///
    /// Contains every distinct token appearing in the corpus plus [`GAP`],
    /// sorted lexicographically. Deterministic: the same corpus always yields
    /// the same index assignment.
    ///
    /// A real corpus token spelled `GAP` aliases with the padding symbol; the
    /// builder deduplicates, so the vocabulary still holds it exactly once.
    #[must_use]
    pub fn from_corpus(corpus: &[Vec<String>]) -> Self {
        let mut unique: BTreeSet<&str> = corpus
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        unique.insert(GAP);

        let words: Vec<String> = unique.into_iter().map(str::to_string).collect();
        let word_to_idx: HashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        let gap_idx = word_to_idx[GAP];

        Self {
            words,
            word_to_idx,
            gap_idx,
        }
    }

    /// Number of words in the vocabulary, including [`GAP`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Get the index for a word, or `None` if it is not in the vocabulary.
    #[must_use]
    pub fn word_to_index(&self, word: &str) -> Option<usize> {
        self.word_to_idx.get(word).copied()
    }

    /// Get the word for an index, or `None` if out of bounds.
    #[must_use]
    pub fn index_to_word(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    /// Index of the reserved [`GAP`] symbol.
    #[must_use]
    pub fn gap_index(&self) -> usize {
        self.gap_idx
    }

    /// All vocabulary words in index order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_sorted_and_contains_gap() {
        let corpus = vec![sent(&["the", "cat", "sat"]), sent(&["dog"])];
        let vocab = Vocabulary::from_corpus(&corpus);
        assert_eq!(vocab.words(), &["GAP", "cat", "dog", "sat", "the"]);
        assert_eq!(vocab.size(), 5);
    }

    #[test]
    fn test_word_index_round_trip() {
        let corpus = vec![sent(&["b", "a", "c"])];
        let vocab = Vocabulary::from_corpus(&corpus);
        for (i, word) in vocab.words().iter().enumerate() {
            assert_eq!(vocab.word_to_index(word), Some(i));
            assert_eq!(vocab.index_to_word(i), Some(word.as_str()));
        }
    }

    #[test]
    fn test_unknown_word_and_index() {
        let vocab = Vocabulary::from_corpus(&[sent(&["only"])]);
        assert_eq!(vocab.word_to_index("missing"), None);
        assert_eq!(vocab.index_to_word(99), None);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let corpus = vec![sent(&["echo", "echo"]), sent(&["echo"])];
        let vocab = Vocabulary::from_corpus(&corpus);
        assert_eq!(vocab.size(), 2); // echo + GAP
    }

    #[test]
    fn test_gap_index_is_cached() {
        let vocab = Vocabulary::from_corpus(&[sent(&["zebra", "aardvark"])]);
        assert_eq!(vocab.index_to_word(vocab.gap_index()), Some(GAP));
    }

    #[test]
    fn test_literal_gap_token_aliases_with_padding() {
        let vocab = Vocabulary::from_corpus(&[sent(&["GAP", "word"])]);
        assert_eq!(
            vocab.words().iter().filter(|w| w.as_str() == GAP).count(),
            1
        );
    }

    #[test]
    fn test_empty_corpus_has_only_gap() {
        let vocab = Vocabulary::from_corpus(&[]);
        assert_eq!(vocab.words(), &[GAP]);
        assert_eq!(vocab.gap_index(), 0);
    }

    #[test]
    fn test_determinism() {
        let corpus = vec![sent(&["delta", "alpha", "charlie", "bravo"])];
        let a = Vocabulary::from_corpus(&corpus);
        let b = Vocabulary::from_corpus(&corpus);
        assert_eq!(a.words(), b.words());
    }
}
