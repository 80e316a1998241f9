//! Purpose: Define the stable public Rust API boundary for the data explorer core.
//! Exports: Classification, sniffing, canonical encoding, the OLAP port, and `Explorer`.
//! Role: Public, additive-only surface used by the CLI and embedding callers.
//! Invariants: Callers reach core functionality through this module.
//! Invariants: Internal parse helpers remain private and are not directly exposed.

mod explorer;

pub use crate::core::canonical::{canonicalize, canonicalize_value};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::olap::{EngineFactory, LazyOlap, OlapPort, ReadyOlap, engine_error};
pub use crate::core::protocol::{Protocol, resolve_protocol};
pub use crate::core::sniff::{
    ContentView, SniffReport, is_parsable_json5_object_or_array, looks_like_json_shape, sniff,
};
pub use explorer::{Explorer, ExplorerParams, FetchStrategy, SourcePlan};

/// Parses JSON5 text (strict JSON first) into a JSON value.
pub fn parse_json5(text: &str) -> Result<serde_json::Value, Error> {
    crate::json::parse::from_str_lenient(text).map_err(|err| {
        let hint = crate::json::parse::hint_for_json5_error(&err, "json5 input");
        Error::new(ErrorKind::Usage)
            .with_message("invalid json5 input")
            .with_hint(hint)
            .with_source(err)
    })
}
