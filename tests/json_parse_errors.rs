//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by runtime parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_eof_and_data_errors() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_str::<Value>(r#"{"a":"#).unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);

    let data_err = parse::from_str::<Vec<u8>>(r#"{"a":1}"#).unwrap_err();
    assert_eq!(parse::categorize_error(&data_err), ParseFailureCategory::Data);
}

#[test]
fn json5_errors_are_categorized() {
    let err = parse::from_str_json5::<Value>("{a: }").unwrap_err();
    assert_ne!(
        parse::categorize_json5_error(&err),
        ParseFailureCategory::Data
    );
    let hint = parse::hint_for_json5_error(&err, "sniff");
    assert!(hint.contains("context: sniff"));
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str_json5::<Value>("[1, 2").unwrap_err();
    let hint = parse::hint_for_json5_error(&err, "test.context");
    assert!(hint.starts_with("parse category: "));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
}
