//! Purpose: Compose protocol resolution, sniffing, engine access, and cache keys.
//! Exports: `Explorer`, `SourcePlan`, `FetchStrategy`, `ExplorerParams`.
//! Role: The data-explorer flow, written against `OlapPort` so it runs on a test double.
//! Invariants: The explorer never fetches; it only plans how a caller should.
//! Invariants: Cache keys are canonical: equal params always give equal keys.

use serde::Serialize;
use std::sync::Arc;

use crate::core::canonical::canonicalize_value;
use crate::core::error::{Error, ErrorKind};
use crate::core::olap::OlapPort;
use crate::core::protocol::{Protocol, resolve_protocol};
use crate::core::sniff::{SniffReport, sniff};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    Http,
    S3,
    /// Unrecognized transport; the caller decides (local path, inline text, reject).
    Local,
}

impl From<Option<Protocol>> for FetchStrategy {
    fn from(protocol: Option<Protocol>) -> Self {
        match protocol {
            Some(Protocol::Http) => FetchStrategy::Http,
            Some(Protocol::S3) => FetchStrategy::S3,
            None => FetchStrategy::Local,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourcePlan {
    pub locator: String,
    pub protocol: Option<Protocol>,
    pub strategy: FetchStrategy,
}

impl SourcePlan {
    pub fn for_locator(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        let protocol = resolve_protocol(&locator);
        Self {
            locator,
            protocol,
            strategy: FetchStrategy::from(protocol),
        }
    }
}

/// Explorer view state that must be cache-keyed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerParams {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_row_index: Option<u32>,
}

impl ExplorerParams {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_rows_per_page(mut self, rows_per_page: u32) -> Self {
        self.rows_per_page = Some(rows_per_page);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_selected_row_index(mut self, index: u32) -> Self {
        self.selected_row_index = Some(index);
        self
    }
}

pub struct Explorer<P> {
    port: P,
}

impl<P: OlapPort> Explorer<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn plan_source(&self, locator: &str) -> SourcePlan {
        SourcePlan::for_locator(locator)
    }

    pub fn inspect(&self, content: &str) -> SniffReport {
        sniff(content)
    }

    pub async fn database(&self) -> Result<Arc<P::Database>, Error> {
        self.port.acquire_database().await
    }

    pub fn cache_key(&self, params: &ExplorerParams) -> Result<String, Error> {
        let value = serde_json::to_value(params).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode explorer params")
                .with_source(err)
        })?;
        canonicalize_value(&value)
    }
}
