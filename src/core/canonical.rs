//! Purpose: Produce a deterministic JSON string for a flat key/value record.
//! Exports: `canonicalize`, `canonicalize_value`.
//! Role: Stable cache keys and diff artifacts independent of insertion order.
//! Invariants: Top-level keys are emitted in strictly descending order, comparing
//!             UTF-16 code units (the host string ordering the keys come from).
//! Invariants: Values are encoded by serde_json unchanged (standard escaping).

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::core::error::{Error, ErrorKind};

struct DescendingRecord<'a>(Vec<(&'a String, &'a Value)>);

impl Serialize for DescendingRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().copied())
    }
}

fn descending(left: &str, right: &str) -> Ordering {
    right.encode_utf16().cmp(left.encode_utf16())
}

pub fn canonicalize(record: &Map<String, Value>) -> Result<String, Error> {
    let mut entries: Vec<_> = record.iter().collect();
    entries.sort_by(|(left, _), (right, _)| descending(left, right));
    serde_json::to_string(&DescendingRecord(entries)).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode canonical record")
            .with_source(err)
    })
}

/// Like [`canonicalize`], for callers holding an arbitrary JSON value.
pub fn canonicalize_value(value: &Value) -> Result<String, Error> {
    match value {
        Value::Object(record) => canonicalize(record),
        _ => Err(Error::new(ErrorKind::Usage)
            .with_message("canonical records must be JSON objects")
            .with_hint("Wrap the value in an object, e.g. {\"value\": ...}.")),
    }
}
