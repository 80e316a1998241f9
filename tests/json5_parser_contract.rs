//! Purpose: Lock parser contract expectations with corpus + differential coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch semantic drift between the json5 parser and the serde_json baseline.
//! Invariants: Strict JSON documents decode to the same value under both parsers.
//! Invariants: JSON5-only syntax is rejected by serde_json and accepted by json5.

use serde_json::Value;

fn parse_json5(input: &str) -> Result<Value, String> {
    json5::from_str::<Value>(input).map_err(|err| err.to_string())
}

fn parse_serde_json(input: &str) -> Result<Value, String> {
    serde_json::from_str::<Value>(input).map_err(|err| err.to_string())
}

fn assert_differential_parity(input: &str) {
    let json5 = parse_json5(input);
    let serde = parse_serde_json(input);
    match (json5, serde) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "parser value mismatch"),
        (Err(_), Err(_)) => {}
        (left, right) => panic!("parser outcome mismatch: json5={left:?}, serde={right:?}"),
    }
}

#[test]
fn corpus_valid_payloads_match_serde() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"unicode":"☃"}"#,
        "[]",
        "{}",
    ];

    for case in corpus {
        assert_differential_parity(case);
    }
}

#[test]
fn corpus_malformed_rejected_by_both() {
    for case in [r#"{"a":}"#, "[1,2", "not json", ""] {
        assert_differential_parity(case);
    }
}

#[test]
fn corpus_json5_extensions_only_parse_as_json5() {
    let corpus = [
        "{a:1,}",
        "[1, 2, 3,]",
        "{'quoted': 'single'}",
        "/* lead */ {\"a\": 1}",
    ];
    for case in corpus {
        assert!(parse_json5(case).is_ok(), "json5 rejected {case}");
        assert!(parse_serde_json(case).is_err(), "serde_json accepted {case}");
    }
}
