//! Single-token normalization rules.
//!
//! Each raw token is either normalized to exactly one output token or dropped
//! entirely; nothing ever splits into multiple tokens.

use super::roman::is_roman;
use super::tag::PosTag;

/// Punctuation characters that are dropped as standalone tokens and trimmed
/// from token edges (together with underscores).
pub const PUNCT: &[char] = &[
    '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '-', '+', '=', '[', ']', '|', ';',
    ':', '<', '>', ',', '.', '?', '/', '{', '}',
];

/// Whether a character belongs to the punctuation set.
#[must_use]
pub fn is_punct(c: char) -> bool {
    PUNCT.contains(&c)
}

/// Normalize one tagged token.
///
/// Rules, applied in order:
/// 1. drop tokens with no ASCII alphanumeric character;
/// 2. drop all-digit tokens;
/// 3. drop Roman numerals longer than one character;
/// 4. drop tokens that are exactly one punctuation-set character;
/// 5. keep singular proper nouns verbatim;
/// 6. otherwise trim leading/trailing underscores and punctuation and
///    lower-case the remainder;
/// 7. drop tokens that trimmed to nothing, or to a single character other
///    than the words `a` and `i`.
#[must_use]
pub fn normalize_token(word: &str, tag: PosTag) -> Option<String> {
    if !word.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if word.chars().count() > 1 && is_roman(word) {
        return None;
    }
    let mut chars = word.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if is_punct(only) {
            return None;
        }
    }
    if tag == PosTag::ProperSingular {
        return Some(word.to_string());
    }

    let trimmed = word.trim_matches(|c: char| c == '_' || is_punct(c));
    let lowered = trimmed.to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    if lowered.chars().count() == 1 && lowered != "a" && lowered != "i" {
        return None;
    }
    Some(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(word: &str) -> Option<String> {
        normalize_token(word, PosTag::Other)
    }

    #[test]
    fn test_ordinary_word_is_lowercased() {
        assert_eq!(norm("Hello"), Some("hello".to_string()));
        assert_eq!(norm("WORLD"), Some("world".to_string()));
    }

    #[test]
    fn test_punctuation_only_is_dropped() {
        assert_eq!(norm("..."), None);
        assert_eq!(norm("--"), None);
        assert_eq!(norm("!?"), None);
    }

    #[test]
    fn test_digits_are_dropped() {
        assert_eq!(norm("1842"), None);
        assert_eq!(norm("7"), None);
    }

    #[test]
    fn test_roman_numerals_are_dropped() {
        assert_eq!(norm("XIV"), None);
        assert_eq!(norm("iv"), None);
    }

    #[test]
    fn test_single_letter_roman_survives_the_roman_rule() {
        // "I" is length 1 so rule 3 does not apply; it lowers to the word "i".
        assert_eq!(norm("I"), Some("i".to_string()));
    }

    #[test]
    fn test_edge_punctuation_is_trimmed() {
        assert_eq!(norm("_whale_"), Some("whale".to_string()));
        assert_eq!(norm("'tis,"), Some("'tis".to_string()));
        assert_eq!(norm("(ship)"), Some("ship".to_string()));
    }

    #[test]
    fn test_interior_punctuation_is_kept() {
        assert_eq!(norm("mother-in-law"), Some("mother-in-law".to_string()));
    }

    #[test]
    fn test_proper_noun_is_kept_verbatim() {
        assert_eq!(
            normalize_token("Ahab", PosTag::ProperSingular),
            Some("Ahab".to_string())
        );
        assert_eq!(
            normalize_token("_Pequod_", PosTag::ProperSingular),
            Some("_Pequod_".to_string())
        );
    }

    #[test]
    fn test_proper_noun_tag_does_not_rescue_earlier_rules() {
        // The drop rules run before the proper-noun check.
        assert_eq!(normalize_token("XIV", PosTag::ProperSingular), None);
        assert_eq!(normalize_token("1842", PosTag::ProperSingular), None);
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(norm("a"), Some("a".to_string()));
        assert_eq!(norm("b"), None);
        assert_eq!(norm("z"), None);
    }

    #[test]
    fn test_token_trimming_to_single_disallowed_char_is_dropped() {
        assert_eq!(norm("_s_"), None);
    }

    #[test]
    fn test_non_ascii_only_token_is_dropped() {
        assert_eq!(norm("\u{00e9}\u{00e9}"), None);
    }
}
