//! Purpose: Shared library crate used by the `dataexplorer` CLI and tests.
//! Exports: `core` (classification, sniffing, canonical encoding, OLAP port, errors),
//!          `api` (stable surface and the explorer pipeline), `notice`.
//! Role: Source resolution and format sniffing for data fed into an embedded OLAP engine.
//! Invariants: Everything except `OlapPort::acquire_database` is synchronous and pure.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub(crate) mod json;
pub mod notice;
