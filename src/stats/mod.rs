//! Per-position statistics over a one-hot encoded corpus.
//!
//! Every operation here is a pure function of the flattened tensor: marginal
//! word probabilities per sentence position, Shannon entropy, effective
//! dimensionality, and threshold-based frequent-word reports. The tensor is
//! never mutated, which is what makes the whole-corpus profile safe to
//! compute in parallel.

use crate::encode::OneHot;
use crate::{CorpusError, CorpusResult};
use ndarray::{s, Array1, ArrayView2, Axis};
use rayon::prelude::*;
use serde::Serialize;

/// Smoothing constant keeping `log2` finite at zero probability.
const ENTROPY_EPS: f32 = 1e-5;

/// Extract the V-wide column block of the flattened tensor for one position:
/// columns `[j * V, (j + 1) * V)`.
///
/// # Errors
///
/// Returns `PositionOutOfRange` if `position >= max_len`; positions are never
/// clamped.
pub fn partition_by_position(
    encoding: &OneHot,
    position: usize,
) -> CorpusResult<ArrayView2<'_, f32>> {
    let l = encoding.max_len();
    if position >= l {
        return Err(CorpusError::PositionOutOfRange {
            position,
            max_len: l,
        });
    }
    let v = encoding.vocab_size();
    Ok(encoding
        .flat()
        .slice_move(s![.., position * v..(position + 1) * v]))
}

/// Marginal distribution `P(word = k)` at the given position: the empirical
/// mean of the partition across all sentences.
///
/// Sums to 1 (up to float tolerance) for a non-empty corpus by the one-hot
/// invariant; an empty corpus yields the zero vector.
///
/// # Errors
///
/// Returns `PositionOutOfRange` if `position >= max_len`.
pub fn position_marginals(encoding: &OneHot, position: usize) -> CorpusResult<Array1<f32>> {
    let partition = partition_by_position(encoding, position)?;
    Ok(marginals_of(&partition, encoding.vocab_size()))
}

/// Entropy (bits) and dimensionality (`2^entropy`) of a position's marginal
/// distribution. Dimensionality reads as the effective vocabulary size at
/// that position.
///
/// # Errors
///
/// Returns `PositionOutOfRange` if `position >= max_len`.
pub fn position_entropy(encoding: &OneHot, position: usize) -> CorpusResult<(f32, f32)> {
    let p = position_marginals(encoding, position)?;
    let entropy = entropy_bits(&p);
    Ok((entropy, entropy.exp2()))
}

/// Shannon entropy in bits of a probability vector:
/// `-sum(p * log2(p + eps))` with a small smoothing constant.
///
/// The smoothing makes a deterministic position come out a hair below zero
/// rather than exactly zero.
#[must_use]
pub fn entropy_bits(p: &Array1<f32>) -> f32 {
    -p.iter().map(|&pk| pk * (pk + ENTROPY_EPS).log2()).sum::<f32>()
}

/// Word-probability pair in a frequent-word report.
#[derive(Debug, Clone, Serialize)]
pub struct FrequentWord {
    pub word: String,
    pub probability: f32,
}

/// Words whose probability at the given position meets `threshold`, most
/// probable first. Ties keep vocabulary order.
///
/// # Errors
///
/// Returns `PositionOutOfRange` if `position >= max_len`.
pub fn position_frequent_words(
    encoding: &OneHot,
    position: usize,
    threshold: f32,
) -> CorpusResult<Vec<FrequentWord>> {
    let p = position_marginals(encoding, position)?;
    let mut rows: Vec<FrequentWord> = encoding
        .vocab()
        .words()
        .iter()
        .zip(p.iter())
        .filter(|(_, &prob)| prob >= threshold)
        .map(|(word, &prob)| FrequentWord {
            word: word.clone(),
            probability: prob,
        })
        .collect();
    // Stable sort: equal probabilities stay in vocabulary order.
    rows.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(rows)
}

/// Per-position entropy report.
#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub position: usize,
    pub entropy: f32,
    pub dimensionality: f32,
    pub gap_probability: f32,
}

/// Entropy, dimensionality, and `GAP` probability for every position.
///
/// The tensor is read-only after construction, so positions are computed in
/// parallel.
#[must_use]
pub fn entropy_profile(encoding: &OneHot) -> Vec<PositionReport> {
    let v = encoding.vocab_size();
    let gap = encoding.vocab().gap_index();
    let flat = encoding.flat();

    (0..encoding.max_len())
        .into_par_iter()
        .map(|position| {
            let partition = flat.slice(s![.., position * v..(position + 1) * v]);
            let p = marginals_of(&partition, v);
            let entropy = entropy_bits(&p);
            PositionReport {
                position,
                entropy,
                dimensionality: entropy.exp2(),
                gap_probability: p[gap],
            }
        })
        .collect()
}

/// Column means of a partition; zero vector when there are no sentences.
fn marginals_of(partition: &ArrayView2<'_, f32>, vocab_size: usize) -> Array1<f32> {
    partition
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(vocab_size))
}
