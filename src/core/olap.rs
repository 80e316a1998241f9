//! Purpose: Define the port through which explorer logic reaches an embedded OLAP engine.
//! Exports: `OlapPort`, `EngineFactory`, `LazyOlap`, `ReadyOlap`.
//! Role: Dependency-injection seam; the engine itself lives behind a collaborator.
//! Invariants: `LazyOlap` constructs at most one live database per instance, even
//!             with concurrent callers awaiting the first construction.
//! Invariants: Callers waiting on one attempt share its outcome; a failure is
//!             retried only by calls made after it was delivered.
//! Invariants: Construction failures surface as `ErrorKind::Engine`; no retry or
//!             timeout policy is applied here.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, OnceCell};

use crate::core::error::{Error, ErrorKind};

/// Capability handing out a ready database handle.
///
/// Implementations own the handle's lifecycle; callers only borrow it through
/// the returned `Arc`. Repeated calls are expected to return the same handle.
#[async_trait]
pub trait OlapPort: Send + Sync {
    type Database: Send + Sync + 'static;

    async fn acquire_database(&self) -> Result<Arc<Self::Database>, Error>;
}

/// Builds an engine instance. [`LazyOlap`] runs at most one `construct` at a time.
#[async_trait]
pub trait EngineFactory: Send + Sync {
    type Database: Send + Sync + 'static;

    async fn construct(&self) -> Result<Self::Database, Error>;
}

/// Port that builds its database on first use and hands out the same handle after.
///
/// Callers that arrive while an attempt is running wait for it and share its
/// outcome, failure included. A failure is not memoized beyond that: a call
/// made after the failure was delivered starts a fresh attempt.
pub struct LazyOlap<F: EngineFactory> {
    factory: F,
    database: OnceCell<Arc<F::Database>>,
    /// Number of finished construction attempts.
    attempts: AtomicU64,
    /// Held for the duration of an attempt.
    last_failure: Mutex<Option<FailedAttempt>>,
}

struct FailedAttempt {
    attempt: u64,
    error: Error,
}

impl<F: EngineFactory> LazyOlap<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            database: OnceCell::new(),
            attempts: AtomicU64::new(0),
            last_failure: Mutex::new(None),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.database.initialized()
    }
}

impl<F: EngineFactory> fmt::Debug for LazyOlap<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyOlap")
            .field("initialized", &self.is_initialized())
            .field("attempts", &self.attempts.load(Ordering::Acquire))
            .finish()
    }
}

#[async_trait]
impl<F: EngineFactory> OlapPort for LazyOlap<F> {
    type Database = F::Database;

    async fn acquire_database(&self) -> Result<Arc<Self::Database>, Error> {
        if let Some(database) = self.database.get() {
            return Ok(Arc::clone(database));
        }
        // Attempts finishing after this point belong to this call.
        let seen = self.attempts.load(Ordering::Acquire);
        let mut last_failure = self.last_failure.lock().await;
        if let Some(database) = self.database.get() {
            return Ok(Arc::clone(database));
        }
        if let Some(failed) = (*last_failure).as_ref().filter(|failed| failed.attempt > seen) {
            tracing::debug!(attempt = failed.attempt, "sharing failed olap engine attempt");
            return Err(failed.error.clone());
        }

        tracing::debug!("constructing olap engine");
        let outcome = self.factory.construct().await;
        let attempt = self.attempts.fetch_add(1, Ordering::AcqRel) + 1;
        match outcome {
            Ok(database) => {
                tracing::info!(attempt, "olap engine ready");
                let database = Arc::new(database);
                // Only the lock holder sets the cell, so this cannot race.
                let _ = self.database.set(Arc::clone(&database));
                *last_failure = None;
                Ok(database)
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "olap engine construction failed");
                let error = if err.kind() == ErrorKind::Engine {
                    err
                } else {
                    engine_error("olap engine construction failed", err)
                };
                *last_failure = Some(FailedAttempt {
                    attempt,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }
}

/// Port over an already-constructed handle; resolves immediately.
pub struct ReadyOlap<D> {
    database: Arc<D>,
}

impl<D> ReadyOlap<D> {
    pub fn new(database: D) -> Self {
        Self {
            database: Arc::new(database),
        }
    }

    pub fn from_arc(database: Arc<D>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl<D: Send + Sync + 'static> OlapPort for ReadyOlap<D> {
    type Database = D;

    async fn acquire_database(&self) -> Result<Arc<D>, Error> {
        Ok(Arc::clone(&self.database))
    }
}

/// Wraps a collaborator-specific failure as an engine acquisition error.
pub fn engine_error(
    message: impl Into<String>,
    source: impl std::error::Error + Send + Sync + 'static,
) -> Error {
    Error::new(ErrorKind::Engine)
        .with_message(message)
        .with_source(source)
}
