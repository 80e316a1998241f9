//! Purpose: Provide the internal runtime JSON and JSON5 decode entrypoints.
//! Exports: `from_str`, `from_str_json5`, `from_str_lenient`, `ParseFailureCategory`,
//!          categorization and hint helpers.
//! Role: Parser boundary that centralizes serde_json and json5 usage details.
//! Invariants: Strict JSON is tried before JSON5 where both are acceptable.
//! Invariants: This file depends only on external crates (it is path-included by tests).
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn from_str_json5<T: DeserializeOwned>(input: &str) -> Result<T, json5::Error> {
    json5::from_str(input)
}

/// Decodes `input` as JSON5, taking the strict JSON path first.
pub(crate) fn from_str_lenient<T: DeserializeOwned>(input: &str) -> Result<T, json5::Error> {
    match from_str(input) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::trace!(
                category = categorize_error(&err).label(),
                "strict json rejected; retrying as json5"
            );
            from_str_json5(input)
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        serde_json::error::Category::Syntax => ParseFailureCategory::Syntax,
        serde_json::error::Category::Eof => ParseFailureCategory::Eof,
        serde_json::error::Category::Data => ParseFailureCategory::Data,
        serde_json::error::Category::Io => ParseFailureCategory::Unknown,
    }
}

pub(crate) fn categorize_json5_error(err: &json5::Error) -> ParseFailureCategory {
    categorize_message(&err.to_string())
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("eof") || lower.contains("end of input") {
        return ParseFailureCategory::Eof;
    }
    if lower.contains("invalid type") || lower.contains("invalid value") {
        return ParseFailureCategory::Data;
    }
    if lower.contains("expected") || lower.contains("unexpected") {
        return ParseFailureCategory::Syntax;
    }
    ParseFailureCategory::Unknown
}

pub(crate) fn hint_for_json5_error(err: &json5::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}. Check the input is a JSON5 object.",
        categorize_json5_error(err).label()
    )
}
