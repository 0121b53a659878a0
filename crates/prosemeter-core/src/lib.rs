//! # prosemeter-core
//!
//! Pure text-statistics routines: word, character, sentence, and paragraph
//! counts, most-frequent content words, and an estimated reading time.
//!
//! Everything here is synchronous and side-effect free; the web layer and
//! the upstream API clients live in their own crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod metrics;
pub mod report;
pub mod stopwords;

pub use metrics::{
    count_characters, count_paragraphs, count_sentences, count_words, most_common_words,
    reading_time_minutes,
};
pub use report::TextReport;
pub use stopwords::is_stop_word;

/// Default number of common words reported for a text.
pub const DEFAULT_COMMON_WORD_LIMIT: usize = 5;

/// Assumed reading speed in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;
