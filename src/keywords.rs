//! Input normalization and keyword extraction.
//!
//! Normalization lowercases and trims the raw text, replaces anything that is
//! not an ASCII letter, digit or whitespace with a space, and collapses
//! whitespace runs. Keywords are the normalized tokens longer than two
//! characters that are not stop words.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::is_stop_word;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Tokens must be strictly longer than this to count as keywords.
const MIN_KEYWORD_LEN: usize = 2;

/// Normalize raw user input into the phrase form used for matching.
///
/// Trimming happens before punctuation is replaced, so `"hello!"` becomes
/// `"hello "` and will not exactly match the `hello` entry.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let replaced = RE_NON_WORD.replace_all(lowered.trim(), " ");
    RE_WHITESPACE.replace_all(&replaced, " ").into_owned()
}

/// Extract keywords from already-normalized text.
///
/// Order and duplicates are preserved: a word repeated twice yields two
/// entries, so it is counted twice by the frequency table.
pub fn keywords_of(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|token| token.len() > MIN_KEYWORD_LEN && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Normalize and extract keywords in one step.
pub fn extract(input: &str) -> Vec<String> {
    keywords_of(&normalize(input))
}
