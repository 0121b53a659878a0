//! Aggregate report for one analyzed text.

use serde::Serialize;

use crate::metrics;
use crate::DEFAULT_COMMON_WORD_LIMIT;

/// All statistics for one submitted text.
///
/// Built fresh per request and discarded after rendering; nothing here is
/// shared or cached across requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextReport {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of characters in the raw input.
    pub char_count: usize,
    /// Number of sentence-ending punctuation runs.
    pub sentence_count: usize,
    /// Number of blank-line-separated segments.
    pub paragraph_count: usize,
    /// Most frequent content words, descending by count.
    pub common_words: Vec<(String, usize)>,
    /// Estimated reading time in minutes, at least 1.
    pub reading_time_minutes: usize,
}

impl TextReport {
    /// Compute a full report for `text` with the default common-word limit.
    pub fn from_text(text: &str) -> Self {
        let word_count = metrics::count_words(text);
        Self {
            word_count,
            char_count: metrics::count_characters(text),
            sentence_count: metrics::count_sentences(text),
            paragraph_count: metrics::count_paragraphs(text),
            common_words: metrics::most_common_words(text, DEFAULT_COMMON_WORD_LIMIT),
            reading_time_minutes: metrics::reading_time_minutes(word_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty_text() {
        let report = TextReport::from_text("");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.char_count, 0);
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.paragraph_count, 0);
        assert!(report.common_words.is_empty());
        assert_eq!(report.reading_time_minutes, 1);
    }

    #[test]
    fn test_report_small_text() {
        let report = TextReport::from_text("Rust is fast. Rust is safe.\n\nUse Rust.");
        assert_eq!(report.word_count, 8);
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.paragraph_count, 2);
        assert_eq!(report.reading_time_minutes, 1);
        assert_eq!(report.common_words.first().map(|(w, _)| w.as_str()), Some("rust"));
    }

    #[test]
    fn test_report_serializes() {
        let report = TextReport::from_text("hello world");
        let json = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(json["word_count"], 2);
    }
}
