//! Part-of-speech tagging capability.
//!
//! The cleaning pipeline interprets exactly one grammatical category:
//! singular proper nouns, which are preserved verbatim instead of being
//! lower-cased and stripped. The tagger is an injected capability so the
//! pipeline can be exercised with a deterministic fake in tests and backed by
//! a real statistical tagger in production.

/// Grammatical category assigned to a token.
///
/// Tags other than the singular proper noun are opaque to the pipeline, so
/// they collapse into a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// Singular proper noun. The normalizer keeps the token verbatim.
    ProperSingular,
    /// Any other grammatical category.
    Other,
}

/// A part-of-speech tagger over an ordered token sequence.
///
/// Implementations must return exactly one tag per input token, in input
/// order.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<PosTag>;
}

/// Heuristic stand-in for an external statistical tagger.
///
/// Marks a token as a singular proper noun when it starts with an uppercase
/// letter, continues with a lowercase one, and does not open the sentence —
/// sentence-initial capitalization is ordinary prose, not evidence of a name.
///
/// Good enough for the reporting binary; tests should prefer a fake with
/// fixed output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizationTagger;

impl Tagger for CapitalizationTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let initial_upper = token.chars().next().map_or(false, char::is_uppercase);
                let has_lower = token.chars().skip(1).any(char::is_lowercase);
                if i > 0 && initial_upper && has_lower {
                    PosTag::ProperSingular
                } else {
                    PosTag::Other
                }
            })
            .collect()
    }
}
