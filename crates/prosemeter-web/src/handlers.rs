//! Request handlers and router wiring.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use prosemeter_client::{AdviceClient, DictionaryClient};
use prosemeter_core::TextReport;

use crate::render::{self, AnalysisView};

/// At most this many of the top common words get a definition lookup.
pub const MAX_DEFINITION_LOOKUPS: usize = 3;

/// Shared per-process state: the two upstream clients.
///
/// Both are cheap `Clone` handles over one connection pool; no request
/// mutates anything here.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Word-definition client.
    pub dictionary: DictionaryClient,
    /// Random-advice client.
    pub advice: AdviceClient,
}

impl AppState {
    /// Bundle the two clients into shared state.
    pub fn new(dictionary: DictionaryClient, advice: AdviceClient) -> Self {
        Self { dictionary, advice }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_advice", get(get_advice))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// `GET /` — the input form with no analysis.
async fn index() -> Html<String> {
    Html(render::page(None))
}

/// `GET /get_advice` — advice text as JSON, always 200.
///
/// The body text is either real advice or the fixed fallback string; the
/// failure variant never reaches this route.
async fn get_advice(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let advice = state.advice.fetch_text().await;
    Json(json!({ "advice": advice }))
}

#[derive(Debug, Deserialize)]
struct AnalyzeForm {
    #[serde(default)]
    text: String,
}

/// `POST /analyze` — compute statistics, look up definitions for the top
/// common words, fetch advice, and render everything that succeeded.
///
/// An absent `text` field is treated as empty. A dictionary failure does
/// not block the advice display, and vice versa; this handler cannot fail.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let report = TextReport::from_text(&form.text);
    tracing::debug!(
        words = report.word_count,
        sentences = report.sentence_count,
        "analyzed submission"
    );

    let definitions = if report.common_words.is_empty() {
        Vec::new()
    } else {
        state
            .dictionary
            .lookup_many(&report.common_words, MAX_DEFINITION_LOOKUPS)
            .await
    };

    let advice = state.advice.fetch().await;

    let view = AnalysisView {
        submitted_text: form.text,
        report,
        definitions,
        advice,
    };
    Html(render::page(Some(&view)))
}
