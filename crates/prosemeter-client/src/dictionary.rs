//! Word-definition lookups against the dictionary API.
//!
//! The upstream responds to `GET <base>/<word>` with a JSON array of
//! entries, each carrying `meanings[].definitions[].definition`. Only the
//! first definition of the first meaning is used.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Pause between sequential lookups in a batch, to avoid hammering the
/// upstream. Not load-bearing for correctness.
const INTER_CALL_DELAY: Duration = Duration::from_millis(100);

/// Outcome of one definition lookup.
///
/// Failures carry a reason string and never escape as `Err` — a failed
/// lookup is ordinary data for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LookupResult {
    /// The upstream returned at least one definition.
    Success {
        /// The word that was looked up.
        word: String,
        /// First definition text from the response.
        definition: String,
    },
    /// The lookup failed; `reason` is human-readable.
    Failure {
        /// The word that was looked up.
        word: String,
        /// Why the lookup failed.
        reason: String,
    },
}

impl LookupResult {
    /// `true` for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The word this result is about, regardless of variant.
    pub fn word(&self) -> &str {
        match self {
            Self::Success { word, .. } | Self::Failure { word, .. } => word,
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct DictEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<DefinitionBody>,
}

#[derive(Debug, Deserialize)]
struct DefinitionBody {
    definition: Option<String>,
}

/// Extract the first definition text, if the response has one.
fn first_definition(entries: &[DictEntry]) -> Option<String> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()?
        .definition
        .clone()
}

// ============================================================================
// Client
// ============================================================================

/// Client for the word-definition API.
#[derive(Clone, Debug)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    /// Create a client over a shared `reqwest::Client`.
    pub fn new(http: reqwest::Client, config: &HttpConfig) -> Self {
        Self {
            http,
            base_url: config.dictionary_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up one word. Always returns a [`LookupResult`]; every failure
    /// mode is folded into the `Failure` variant.
    pub async fn lookup(&self, word: &str) -> LookupResult {
        match self.try_lookup(word).await {
            Ok(definition) => LookupResult::Success {
                word: word.to_string(),
                definition,
            },
            Err(err) => {
                log::warn!("definition lookup for {word:?} failed: {err}");
                LookupResult::Failure {
                    word: word.to_string(),
                    reason: lookup_failure_reason(&err),
                }
            }
        }
    }

    /// Look up the first `max` entries of a ranked `(word, count)` list,
    /// sequentially, returning only the successful lookups in input order.
    pub async fn lookup_many(
        &self,
        words: &[(String, usize)],
        max: usize,
    ) -> Vec<LookupResult> {
        let queries = &words[..words.len().min(max)];
        let mut found = Vec::with_capacity(queries.len());

        for (i, (word, _count)) in queries.iter().enumerate() {
            let result = self.lookup(word).await;
            if result.is_success() {
                found.push(result);
            }
            if i + 1 < queries.len() {
                tokio::time::sleep(INTER_CALL_DELAY).await;
            }
        }

        found
    }

    async fn try_lookup(&self, word: &str) -> Result<String> {
        let url = format!("{}/{word}", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let entries: Vec<DictEntry> = response.json().await?;
        first_definition(&entries).ok_or(Error::UnexpectedFormat)
    }
}

/// Map an internal error to the reason string shown to users.
fn lookup_failure_reason(err: &Error) -> String {
    match err {
        Error::Status(_) => "word not found in dictionary".to_string(),
        Error::UnexpectedFormat => "no definition found".to_string(),
        Error::Http(e) => format!("API error: {e}"),
    }
}
