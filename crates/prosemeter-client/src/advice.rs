//! Random-advice fetches against the advice API.
//!
//! The upstream responds with `{"slip": {"id": 123, "advice": "..."}}`.
//! Any other shape is a failure; nothing here panics or returns `Err`.

use serde::{Deserialize, Serialize};

use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Fixed text shown when advice could not be fetched.
pub const ADVICE_FALLBACK: &str = "Failed to fetch advice. Please try again.";

/// Outcome of one advice fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AdviceResult {
    /// The upstream returned a well-formed advice slip.
    Success {
        /// The advice text.
        text: String,
        /// Upstream identifier of the slip.
        id: u64,
    },
    /// The fetch failed; `reason` is human-readable.
    Failure {
        /// Why the fetch failed.
        reason: String,
    },
}

impl AdviceResult {
    /// `true` for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct SlipEnvelope {
    slip: Option<Slip>,
}

#[derive(Debug, Deserialize)]
struct Slip {
    id: Option<u64>,
    advice: Option<String>,
}

fn extract_slip(envelope: SlipEnvelope) -> Option<(String, u64)> {
    let slip = envelope.slip?;
    Some((slip.advice?, slip.id?))
}

// ============================================================================
// Client
// ============================================================================

/// Client for the random-advice API.
#[derive(Clone, Debug)]
pub struct AdviceClient {
    http: reqwest::Client,
    url: String,
}

impl AdviceClient {
    /// Create a client over a shared `reqwest::Client`.
    pub fn new(http: reqwest::Client, config: &HttpConfig) -> Self {
        Self {
            http,
            url: config.advice_url.clone(),
        }
    }

    /// Fetch one piece of advice. Always returns an [`AdviceResult`].
    pub async fn fetch(&self) -> AdviceResult {
        match self.try_fetch().await {
            Ok((text, id)) => AdviceResult::Success { text, id },
            Err(err) => {
                log::warn!("advice fetch failed: {err}");
                AdviceResult::Failure {
                    reason: advice_failure_reason(&err),
                }
            }
        }
    }

    /// Fetch advice and return only the text, falling back to
    /// [`ADVICE_FALLBACK`] on any failure. Callers never see the
    /// `Failure` variant through this accessor.
    pub async fn fetch_text(&self) -> String {
        match self.fetch().await {
            AdviceResult::Success { text, .. } => text,
            AdviceResult::Failure { .. } => ADVICE_FALLBACK.to_string(),
        }
    }

    async fn try_fetch(&self) -> Result<(String, u64)> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let envelope: SlipEnvelope = response.json().await?;
        extract_slip(envelope).ok_or(Error::UnexpectedFormat)
    }
}

/// Map an internal error to the reason string shown to users.
fn advice_failure_reason(err: &Error) -> String {
    match err {
        Error::Status(_) => "failed to fetch advice".to_string(),
        Error::UnexpectedFormat => "unexpected API response format".to_string(),
        Error::Http(e) => format!("HTTP error: {e}"),
    }
}
