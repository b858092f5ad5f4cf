// Response extraction tests through the public API, from wire JSON down
use querygen::extract::{extract, parse_reply, NO_QUERY_SENTINEL};
use querygen::llm::GenerateResponse;
use serde_json::json;

fn response_with_text(text: &str) -> GenerateResponse {
    serde_json::from_value(json!({
        "candidates": [
            {"content": {"parts": [{"text": text}]}}
        ]
    }))
    .unwrap()
}

#[test]
fn test_round_trip_all_three_sections() {
    let response = response_with_text(
        "Here you go:\n```sql\nSELECT 1;\n```\n**Explanation:** foo\n**Note:** bar",
    );
    let answer = extract(&response);
    assert_eq!(answer.sql_query, "SELECT 1;");
    assert_eq!(answer.explanation, "foo");
    assert_eq!(answer.note, "bar");
}

#[test]
fn test_no_markers_yields_sentinel_and_empties() {
    let answer = extract(&response_with_text("plain prose"));
    assert_eq!(answer.sql_query, NO_QUERY_SENTINEL);
    assert_eq!(answer.explanation, "");
    assert_eq!(answer.note, "");
}

#[test]
fn test_explanation_without_note_runs_to_end() {
    let answer = parse_reply("**Explanation:** everything after the marker");
    assert_eq!(answer.explanation, "everything after the marker");
    assert_eq!(answer.note, "");
}

#[test]
fn test_missing_candidates_is_empty_not_error() {
    let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
    let answer = extract(&response);
    assert_eq!(answer.sql_query, NO_QUERY_SENTINEL);
}

#[test]
fn test_missing_parts_is_empty_not_error() {
    let response: GenerateResponse =
        serde_json::from_value(json!({"candidates": [{"content": {}}]})).unwrap();
    let answer = extract(&response);
    assert_eq!(answer.sql_query, NO_QUERY_SENTINEL);
    assert_eq!(answer.explanation, "");
    assert_eq!(answer.note, "");
}

#[test]
fn test_multiline_sql_block_is_trimmed() {
    let answer = parse_reply(
        "```sql\n\nSELECT a, b\nFROM t\nWHERE a > 1\nORDER BY a;\n\n```\ntrailing prose",
    );
    assert_eq!(answer.sql_query, "SELECT a, b\nFROM t\nWHERE a > 1\nORDER BY a;");
}

#[test]
fn test_only_first_markers_are_honored() {
    let text = "**Explanation:** first\n**Note:** note one\n**Explanation:** second";
    let answer = parse_reply(text);
    assert_eq!(answer.explanation, "first");
    // Note takes everything after the first note marker, later markers included
    assert_eq!(answer.note, "note one\n**Explanation:** second");
}
