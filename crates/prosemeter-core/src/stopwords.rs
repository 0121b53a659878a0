//! Fixed stop-word set for common-word ranking.
//!
//! Common English function words, pronouns, and contractions are excluded
//! from frequency ranking so that "the the the cat" ranks "cat", not "the".
//! The list is deliberately fixed and non-configurable; it is materialized
//! into a `HashSet` once, on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words, pronouns, and contractions excluded from ranking.
static STOP_WORDS: &[&str] = &[
    // Articles, conjunctions, prepositions, auxiliaries
    "a", "about", "all", "am", "an", "and", "any", "are", "as", "at", "be", "but", "by", "can",
    "com", "could", "did", "do", "does", "doing", "down", "each", "few", "for", "from", "had",
    "has", "have", "here", "how", "if", "in", "into", "is", "it", "its", "just", "more", "new",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "out", "over",
    "own", "said", "same", "so", "some", "such", "than", "that", "the", "then", "there", "these",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "were", "what",
    "when", "where", "which", "while", "why", "will", "with", "would", "your",
    // Pronouns
    "he", "her", "him", "himself", "his", "i", "me", "my", "myself", "our", "ours", "ourselves",
    "she", "their", "theirs", "them", "themselves", "they", "we", "who", "whom", "you", "yours",
    "yourself", "yourselves",
    // Contractions
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
    "hadn't", "won't", "wouldn't", "can't", "couldn't", "shouldn't", "mightn't", "mustn't",
    "i'm", "you're", "he's", "she's", "it's", "we're", "they're", "that's", "who's", "what's",
    "i've", "you've", "we've", "they've", "could've", "should've", "would've", "i'll", "you'll",
    "he'll", "she'll", "it'll", "we'll", "they'll", "i'd", "you'd", "he'd", "she'd", "we'd",
    "they'd",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Check whether a lowercased token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}
