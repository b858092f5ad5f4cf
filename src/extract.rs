//! Split a model reply into query, explanation, and note.
//!
//! The reply is free text; the interesting pieces are delimited by a fenced
//! ```sql code block and the literal `**Explanation:**` / `**Note:**`
//! markers. Markers are matched on first occurrence only; repeated markers
//! are deliberately not handled, for compatibility with replies shaped by
//! the prompt template.

use crate::llm::client::GenerateResponse;

pub const NO_QUERY_SENTINEL: &str = "No SQL query generated.";

const SQL_FENCE: &str = "```sql";
const FENCE: &str = "```";
const EXPLANATION_MARKER: &str = "**Explanation:**";
const NOTE_MARKER: &str = "**Note:**";

/// The parsed result of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAnswer {
    pub sql_query: String,
    pub explanation: String,
    pub note: String,
}

/// Extract the answer fields from a raw reply. A reply with any link of the
/// candidates chain missing is treated as empty text, never an error.
pub fn extract(response: &GenerateResponse) -> GeneratedAnswer {
    parse_reply(response.reply_text())
}

/// Text-level extraction, one decision point per field.
pub fn parse_reply(text: &str) -> GeneratedAnswer {
    let sql_query = match text.find(SQL_FENCE) {
        Some(start) => {
            let rest = &text[start + SQL_FENCE.len()..];
            let body = match rest.find(FENCE) {
                Some(end) => &rest[..end],
                None => rest,
            };
            body.trim().to_string()
        }
        None => NO_QUERY_SENTINEL.to_string(),
    };

    let explanation = match text.find(EXPLANATION_MARKER) {
        Some(start) => {
            let rest = &text[start + EXPLANATION_MARKER.len()..];
            let body = match rest.find(NOTE_MARKER) {
                Some(end) => &rest[..end],
                None => rest,
            };
            body.trim().to_string()
        }
        None => String::new(),
    };

    let note = match text.find(NOTE_MARKER) {
        Some(start) => text[start + NOTE_MARKER.len()..].trim().to_string(),
        None => String::new(),
    };

    GeneratedAnswer {
        sql_query,
        explanation,
        note,
    }
}
