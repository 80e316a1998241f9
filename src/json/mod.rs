//! Purpose: Internal JSON/JSON5 parsing boundary shared by the sniffer and CLI.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for parser choice so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON and JSON5 decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
