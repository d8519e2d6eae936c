//! Roman-numeral classification.
//!
//! Book corpora are full of chapter numbers (`IV`, `XII`, `mmxx`) that should
//! not survive into the vocabulary.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROMAN_RE: Regex =
        Regex::new(r"(?i)^M{0,3}(CM|CD|D?C{0,3})?(XC|XL|L?X{0,3})?(IX|IV|V?I{0,3})?$")
            .expect("roman numeral pattern compiles");
}

/// Returns true iff the whole token matches the Roman-numeral grammar,
/// case-insensitively.
///
/// The empty string matches the grammar (every group is optional), so callers
/// that need to exclude empty or single-character tokens must apply their own
/// length guard.
#[must_use]
pub fn is_roman(word: &str) -> bool {
    ROMAN_RE.is_match(word)
}
