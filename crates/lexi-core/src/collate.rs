//! Locale-style word ordering.
//!
//! Words compare first by their base letters (compatibility-decomposed,
//! combining marks dropped, case folded), then by accents, then by case with
//! lowercase sorting ahead of uppercase. Raw code point order breaks any
//! remaining tie so the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case_pattern(a).cmp(&case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(word: &str) -> String {
    word.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented(word: &str) -> String {
    word.nfkd().flat_map(char::to_lowercase).collect()
}

fn case_pattern(word: &str) -> Vec<bool> {
    word.chars().map(char::is_uppercase).collect()
}
