//! Purpose: Define a stable, structured schema for non-fatal stderr notices.
//! Exports: `Notice`, `notice_json`, `shape_mismatch_notice`.
//! Role: Shared contract helper for CLI diagnostics (non-error events).
//! Invariants: Notices are non-fatal and never alter stdout payloads.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use serde_json::{Map, Value, json};

use crate::core::sniff::SniffReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: String,
    pub time: String,
    pub cmd: String,
    pub source: String,
    pub message: String,
    pub details: Map<String, Value>,
}

pub fn notice_json(notice: &Notice) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(notice.kind));
    inner.insert("time".to_string(), json!(notice.time));
    inner.insert("cmd".to_string(), json!(notice.cmd));
    inner.insert("source".to_string(), json!(notice.source));
    inner.insert("message".to_string(), json!(notice.message));
    inner.insert("details".to_string(), Value::Object(notice.details.clone()));

    let mut outer = Map::new();
    outer.insert("notice".to_string(), Value::Object(inner));
    Value::Object(outer)
}

/// Builds the notice for content whose outer brackets looked like JSON but
/// which did not parse. Returns `None` when the report is consistent.
pub fn shape_mismatch_notice(
    report: &SniffReport,
    cmd: &str,
    source: &str,
    time: String,
) -> Option<Notice> {
    if !report.is_shape_mismatch() {
        return None;
    }
    let mut details = Map::new();
    details.insert("looks_like_json".to_string(), json!(report.looks_like_json));
    details.insert("parsable_json5".to_string(), json!(report.parsable_json5));
    Some(Notice {
        kind: "shape-mismatch".to_string(),
        time,
        cmd: cmd.to_string(),
        source: source.to_string(),
        message: "content looks like JSON but does not parse as JSON5; showing plain text"
            .to_string(),
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::{Notice, notice_json, shape_mismatch_notice};
    use crate::core::sniff::sniff;
    use serde_json::{Map, Value};

    #[test]
    fn notice_json_has_required_fields() {
        let mut details = Map::new();
        details.insert("bytes".to_string(), Value::from(3));

        let notice = Notice {
            kind: "shape-mismatch".to_string(),
            time: "2026-02-01T00:00:00Z".to_string(),
            cmd: "sniff".to_string(),
            source: "data.json".to_string(),
            message: "content looks like JSON".to_string(),
            details,
        };

        let value = notice_json(&notice);
        let obj = value
            .get("notice")
            .and_then(|v| v.as_object())
            .expect("notice object");

        assert_eq!(obj.get("kind").and_then(|v| v.as_str()), Some("shape-mismatch"));
        assert_eq!(
            obj.get("time").and_then(|v| v.as_str()),
            Some("2026-02-01T00:00:00Z")
        );
        assert_eq!(obj.get("cmd").and_then(|v| v.as_str()), Some("sniff"));
        assert_eq!(obj.get("source").and_then(|v| v.as_str()), Some("data.json"));
        assert!(obj.get("details").and_then(|v| v.as_object()).is_some());
    }

    #[test]
    fn mismatch_notice_only_for_inconsistent_reports() {
        let time = "2026-02-01T00:00:00Z".to_string();
        assert!(shape_mismatch_notice(&sniff("{a: 1}"), "sniff", "-", time.clone()).is_none());
        assert!(shape_mismatch_notice(&sniff("plain"), "sniff", "-", time.clone()).is_none());

        let notice = shape_mismatch_notice(&sniff("{a: 1]"), "sniff", "-", time).expect("notice");
        assert_eq!(notice.kind, "shape-mismatch");
        assert_eq!(notice.details["parsable_json5"], Value::Bool(false));
    }
}
