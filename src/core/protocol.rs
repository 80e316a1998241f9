//! Purpose: Classify a resource locator into the transport used to fetch it.
//! Exports: `Protocol`, `resolve_protocol`.
//! Role: Drives fetch-strategy selection for explorer sources.
//! Invariants: Precedence is fixed: http(s) first, then s3, else unrecognized.
//! Invariants: Never fails; unrecognized input yields `None`, not an error.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    S3,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::S3 => "s3",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the transport class for `locator`, or `None` when it cannot be
/// determined (empty input, other schemes, plain text).
pub fn resolve_protocol(locator: &str) -> Option<Protocol> {
    let protocol = if has_prefix_ignore_case(locator, "http://")
        || has_prefix_ignore_case(locator, "https://")
    {
        Some(Protocol::Http)
    } else if locator.starts_with("s3://") {
        Some(Protocol::S3)
    } else {
        None
    };
    tracing::debug!(locator, protocol = ?protocol, "resolved locator protocol");
    protocol
}

fn has_prefix_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::{Protocol, resolve_protocol};

    #[test]
    fn http_schemes_match_case_insensitively() {
        for locator in [
            "http://example.com/data.parquet",
            "https://example.com/data.csv",
            "HTTP://EXAMPLE.COM",
            "HttPs://mixed.case/path",
            "https://",
        ] {
            assert_eq!(resolve_protocol(locator), Some(Protocol::Http), "{locator}");
        }
    }

    #[test]
    fn s3_prefix_is_literal() {
        assert_eq!(resolve_protocol("s3://bucket/key.json"), Some(Protocol::S3));
        assert_eq!(resolve_protocol("s3://"), Some(Protocol::S3));
        assert_eq!(resolve_protocol("S3://bucket/key.json"), None);
    }

    #[test]
    fn unrecognized_locators_resolve_to_none() {
        for locator in [
            "",
            "ftp://x",
            "hello world",
            "/tmp/data.json",
            "http:/missing-slash",
            " https://leading-space",
            "httpx://nope",
        ] {
            assert_eq!(resolve_protocol(locator), None, "{locator:?}");
        }
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(resolve_protocol("héllo://x"), None);
        assert_eq!(resolve_protocol("日本語"), None);
    }

    #[test]
    fn protocol_labels_are_stable() {
        assert_eq!(Protocol::Http.to_string(), "http");
        assert_eq!(Protocol::S3.as_str(), "s3");
        assert_eq!(
            serde_json::to_string(&Protocol::S3).expect("encode"),
            "\"s3\""
        );
    }
}
