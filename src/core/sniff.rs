//! Purpose: Decide whether raw text content should be offered as structured data.
//! Exports: `looks_like_json_shape`, `is_parsable_json5_object_or_array`, `sniff`,
//!          `SniffReport`, `ContentView`.
//! Role: Renderer selection for fetched explorer content.
//! Invariants: The shape check is bracket-class only (no pairing, no parse).
//! Invariants: The JSON5 check never surfaces a parse failure; it yields `false`.
//! Invariants: The two predicates stay independent; `sniff` only composes them.

use serde::Serialize;
use serde_json::Value;

use crate::json::parse;

/// Cheap structural check: after trimming, the text starts with `{` or `[`
/// and ends with `}` or `]`.
///
/// Trimming uses the ECMAScript whitespace set, so a leading byte-order mark
/// is dropped while U+0085 (NEL) is kept. Start and end are tested
/// independently, so `{"a":1]` passes. Malformed content with plausible outer
/// brackets is an accepted false positive.
pub fn looks_like_json_shape(text: &str) -> bool {
    let trimmed = text.trim_matches(is_ecmascript_whitespace);
    trimmed.len() >= 2
        && trimmed.starts_with(['{', '['])
        && trimmed.ends_with(['}', ']'])
}

/// Unicode `White_Space` without NEL, plus the byte-order mark.
fn is_ecmascript_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Parses `text` as JSON5 and reports whether it is a non-null object or array.
pub fn is_parsable_json5_object_or_array(text: &str) -> bool {
    match parse::from_str_lenient::<Value>(text) {
        Ok(value) => matches!(value, Value::Object(_) | Value::Array(_)),
        Err(err) => {
            tracing::debug!(
                category = parse::categorize_json5_error(&err).label(),
                "content is not parsable as json5"
            );
            false
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentView {
    Structured,
    PlainText,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SniffReport {
    pub looks_like_json: bool,
    pub parsable_json5: bool,
}

impl SniffReport {
    pub fn view(&self) -> ContentView {
        if self.parsable_json5 {
            ContentView::Structured
        } else {
            ContentView::PlainText
        }
    }

    /// Shape looked like JSON but the parser rejected it.
    pub fn is_shape_mismatch(&self) -> bool {
        self.looks_like_json && !self.parsable_json5
    }
}

/// Runs the shape check as a pre-filter and only parses content that passes it.
///
/// The pre-filter is authoritative for the view: JSON5 that would parse but
/// does not start and end with brackets, such as a document led by a
/// `// comment`, is reported as plain text without being parsed.
pub fn sniff(text: &str) -> SniffReport {
    let looks_like_json = looks_like_json_shape(text);
    let parsable_json5 = looks_like_json && is_parsable_json5_object_or_array(text);
    let report = SniffReport {
        looks_like_json,
        parsable_json5,
    };
    tracing::debug!(
        bytes = text.len(),
        looks_like_json,
        parsable_json5,
        "sniffed content"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::{
        ContentView, SniffReport, is_parsable_json5_object_or_array, looks_like_json_shape, sniff,
    };

    #[test]
    fn shape_accepts_objects_and_arrays() {
        assert!(looks_like_json_shape(r#"{"a":1}"#));
        assert!(looks_like_json_shape("[1,2]\n"));
        assert!(looks_like_json_shape("\r\n  {\r\n  \"a\": 1\r\n}\r\n"));
        assert!(looks_like_json_shape("[]"));
    }

    #[test]
    fn shape_tests_bracket_class_not_pairing() {
        assert!(looks_like_json_shape(r#"{"a":1]"#));
        assert!(looks_like_json_shape("[oops}"));
        assert!(looks_like_json_shape("{ not json at all }"));
    }

    #[test]
    fn shape_rejects_plain_text() {
        assert!(!looks_like_json_shape("hello"));
        assert!(!looks_like_json_shape(""));
        assert!(!looks_like_json_shape("   \n"));
        assert!(!looks_like_json_shape("{"));
        assert!(!looks_like_json_shape("]"));
        assert!(!looks_like_json_shape("\"string\""));
        assert!(!looks_like_json_shape("{\"a\":1} trailing"));
    }

    #[test]
    fn shape_trims_a_byte_order_mark_but_not_nel() {
        assert!(looks_like_json_shape("\u{feff}{\"a\":1}"));
        assert!(looks_like_json_shape("\u{feff}\u{a0}[1]\u{2028}"));
        assert!(!looks_like_json_shape("\u{85}{\"a\":1}"));
        assert!(!looks_like_json_shape("[1]\u{85}"));
    }

    #[test]
    fn json5_accepts_relaxed_grammar() {
        assert!(is_parsable_json5_object_or_array("{a:1,}"));
        assert!(is_parsable_json5_object_or_array("// comment\n[1, 2, 3,]"));
        assert!(is_parsable_json5_object_or_array("{'single': 'quotes'}"));
        assert!(is_parsable_json5_object_or_array(r#"{"strict": true}"#));
    }

    #[test]
    fn json5_rejects_scalars_null_and_garbage() {
        assert!(!is_parsable_json5_object_or_array("null"));
        assert!(!is_parsable_json5_object_or_array("not json"));
        assert!(!is_parsable_json5_object_or_array("42"));
        assert!(!is_parsable_json5_object_or_array("'text'"));
        assert!(!is_parsable_json5_object_or_array(r#"{"a":1]"#));
        assert!(!is_parsable_json5_object_or_array(""));
    }

    #[test]
    fn sniff_marks_shape_mismatch() {
        let report = sniff(r#"{"a":1]"#);
        assert_eq!(
            report,
            SniffReport {
                looks_like_json: true,
                parsable_json5: false,
            }
        );
        assert!(report.is_shape_mismatch());
        assert_eq!(report.view(), ContentView::PlainText);
    }

    #[test]
    fn sniff_selects_structured_view() {
        let report = sniff("{a: [1, 2], b: 'x',}\n");
        assert!(report.looks_like_json);
        assert!(report.parsable_json5);
        assert_eq!(report.view(), ContentView::Structured);
    }

    #[test]
    fn sniff_shows_comment_led_json5_as_plain_text() {
        let text = "// header\n{a: 1}";
        assert!(is_parsable_json5_object_or_array(text));
        assert_eq!(sniff(text).view(), ContentView::PlainText);
    }

    #[test]
    fn sniff_treats_a_bom_prefixed_document_as_structured() {
        let report = sniff("\u{feff}{\"a\":1}");
        assert!(report.looks_like_json);
        assert!(report.parsable_json5);
        assert_eq!(report.view(), ContentView::Structured);
    }

    #[test]
    fn sniff_skips_parse_for_plain_text() {
        let report = sniff("id,name\n1,alice\n");
        assert!(!report.looks_like_json);
        assert!(!report.parsable_json5);
        assert!(!report.is_shape_mismatch());
    }
}
