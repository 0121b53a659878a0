//! Server-side HTML rendering.
//!
//! Pages are assembled as plain strings; all user-supplied and upstream
//! text passes through [`escape`] before it reaches the page.

use prosemeter_client::{AdviceResult, LookupResult};
use prosemeter_core::TextReport;

/// Everything the analyzed page needs: the echoed submission, the report,
/// the successful definition lookups, and the advice outcome.
#[derive(Clone, Debug)]
pub struct AnalysisView {
    /// The text as submitted, echoed back into the form.
    pub submitted_text: String,
    /// Computed statistics.
    pub report: TextReport,
    /// Successful definition lookups for the top common words.
    pub definitions: Vec<LookupResult>,
    /// Advice fetch outcome, success or failure.
    pub advice: AdviceResult,
}

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full page, with or without an analysis section.
pub fn page(analysis: Option<&AnalysisView>) -> String {
    let submitted = analysis.map(|a| a.submitted_text.as_str()).unwrap_or("");

    let mut body = String::new();
    body.push_str("<h1>Prosemeter</h1>\n");
    body.push_str(&form_section(submitted));
    if let Some(view) = analysis {
        body.push_str(&stats_section(&view.report));
        body.push_str(&common_words_section(&view.report, &view.definitions));
        body.push_str(&advice_section(&view.advice));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Prosemeter</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn form_section(submitted: &str) -> String {
    format!(
        "<form action=\"/analyze\" method=\"post\">\n\
         <textarea name=\"text\" rows=\"10\" cols=\"60\" \
         placeholder=\"Paste your text here\">{}</textarea>\n\
         <br>\n<button type=\"submit\">Analyze</button>\n</form>\n",
        escape(submitted)
    )
}

fn stats_section(report: &TextReport) -> String {
    format!(
        "<section id=\"stats\">\n<h2>Statistics</h2>\n<ul>\n\
         <li>Word count: {}</li>\n\
         <li>Character count: {}</li>\n\
         <li>Sentence count: {}</li>\n\
         <li>Paragraph count: {}</li>\n\
         <li>Reading time: {} min</li>\n\
         </ul>\n</section>\n",
        report.word_count,
        report.char_count,
        report.sentence_count,
        report.paragraph_count,
        report.reading_time_minutes,
    )
}

fn common_words_section(report: &TextReport, definitions: &[LookupResult]) -> String {
    if report.common_words.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for (word, count) in &report.common_words {
        let definition = definitions
            .iter()
            .find_map(|lookup| match lookup {
                LookupResult::Success { word: w, definition } if w == word => {
                    Some(definition.as_str())
                }
                _ => None,
            })
            .unwrap_or("—");
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(word),
            count,
            escape(definition)
        ));
    }

    format!(
        "<section id=\"common-words\">\n<h2>Common words</h2>\n\
         <table>\n<tr><th>Word</th><th>Count</th><th>Definition</th></tr>\n\
         {rows}</table>\n</section>\n"
    )
}

fn advice_section(advice: &AdviceResult) -> String {
    let inner = match advice {
        AdviceResult::Success { text, id } => {
            format!("<p>{} <small>(slip #{id})</small></p>", escape(text))
        }
        AdviceResult::Failure { reason } => {
            format!("<p class=\"advice-failed\">Advice unavailable: {}</p>", escape(reason))
        }
    };
    format!("<section id=\"advice\">\n<h2>Advice</h2>\n{inner}\n</section>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> AnalysisView {
        AnalysisView {
            submitted_text: "cat cat dog".to_string(),
            report: TextReport::from_text("cat cat dog"),
            definitions: vec![LookupResult::Success {
                word: "cat".to_string(),
                definition: "a small feline".to_string(),
            }],
            advice: AdviceResult::Success {
                text: "Nap often.".to_string(),
                id: 7,
            },
        }
    }

    #[test]
    fn test_escape_replaces_special_chars() {
        assert_eq!(
            escape(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_bare_page_has_form_only() {
        let html = page(None);
        assert!(html.contains("<form action=\"/analyze\""));
        assert!(!html.contains("id=\"stats\""));
        assert!(!html.contains("id=\"advice\""));
    }

    #[test]
    fn test_analyzed_page_has_all_sections() {
        let view = sample_view();
        let html = page(Some(&view));
        assert!(html.contains("Word count: 3"));
        assert!(html.contains("Reading time: 1 min"));
        assert!(html.contains("a small feline"));
        assert!(html.contains("Nap often."));
        assert!(html.contains("slip #7"));
    }

    #[test]
    fn test_word_without_definition_gets_placeholder() {
        let view = sample_view();
        let html = page(Some(&view));
        // "dog" has no definition in the view
        assert!(html.contains("<tr><td>dog</td><td>1</td><td>—</td></tr>"));
    }

    #[test]
    fn test_submitted_text_is_escaped_into_form() {
        let mut view = sample_view();
        view.submitted_text = "<script>alert(1)</script>".to_string();
        let html = page(Some(&view));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_advice_failure_renders_reason() {
        let mut view = sample_view();
        view.advice = AdviceResult::Failure {
            reason: "failed to fetch advice".to_string(),
        };
        let html = page(Some(&view));
        assert!(html.contains("Advice unavailable: failed to fetch advice"));
    }

    #[test]
    fn test_empty_text_skips_common_words_section() {
        let view = AnalysisView {
            submitted_text: String::new(),
            report: TextReport::from_text(""),
            definitions: Vec::new(),
            advice: AdviceResult::Failure {
                reason: "failed to fetch advice".to_string(),
            },
        };
        let html = page(Some(&view));
        assert!(html.contains("Word count: 0"));
        assert!(html.contains("Reading time: 1 min"));
        assert!(!html.contains("id=\"common-words\""));
        assert!(html.contains("id=\"advice\""));
    }
}
