//! Text scanning and counting.
//!
//! All functions take `&str` and are pure. The word pattern treats internal
//! apostrophes and hyphens as part of a single token, so "don't" and
//! "well-known" each count once.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::is_stop_word;
use crate::WORDS_PER_MINUTE;

/// Word-like tokens: letters, with internal `'` or `-` joins.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z]+(?:['-][a-z]+)*\b").expect("valid word pattern"));

/// A maximal run of sentence-ending punctuation counts as one sentence.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// Paragraph separator: one or more blank lines.
static PARAGRAPH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid paragraph pattern"));

/// Count word tokens. Contractions and hyphenated words count once each.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Count characters (Unicode scalar values) in the raw input.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Count sentences. A run like `?!` or `...` ends one sentence, not several.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_PATTERN.find_iter(text).count()
}

/// Count paragraphs: non-empty segments separated by blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_PATTERN
        .split(text)
        .filter(|segment| !segment.is_empty())
        .count()
}

/// Rank the most frequent content words in `text`.
///
/// Tokens are lowercased; tokens shorter than 3 characters or in the
/// stop-word set are discarded. Returns at most `limit` `(word, count)`
/// pairs in descending count order. Ties keep first-occurrence order
/// (the sort is stable over insertion order).
pub fn most_common_words(text: &str, limit: usize) -> Vec<(String, usize)> {
    if text.is_empty() || limit == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str()) {
        if token.len() < 3 || is_stop_word(token) {
            continue;
        }
        if let Some(n) = counts.get_mut(token) {
            *n += 1;
        } else {
            counts.insert(token.to_string(), 1);
            first_seen.push(token.to_string());
        }
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Estimated reading time in whole minutes at 200 wpm, minimum 1.
pub fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1)
}
