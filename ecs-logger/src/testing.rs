//! An [`Engine`] that records calls instead of logging them.
//!
//! Useful for asserting what a [`SchemaLogger`](crate::SchemaLogger) hands
//! to its engine: which severity method was called, and the positional
//! arguments in the order they were passed.
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde_json::Value;

use crate::{Args, Engine, EngineKind, Level};

/// The positional arguments of a recorded call. Fields are captured as
/// JSON so that they can be compared after the call returns.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedArgs {
    /// `(message, fields)`
    MessageFirst(String, Option<Value>),
    /// `(fields, message)`
    FieldsFirst(Option<Value>, String),
}

/// One call received by a [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    /// The severity method that was called.
    pub method: Level,
    /// The arguments it was called with.
    pub args: RecordedArgs,
}

/// Error returned by a [`RecordingEngine`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RecordingError {
    /// The engine was told to reject calls at this level.
    #[error("recording engine rejected a {0} call")]
    Rejected(Level),
    /// The fields could not be captured as JSON.
    #[error("failed to capture fields: {0}")]
    Capture(String),
}

/// An in-memory engine for tests.
///
/// Clones share the same recorded calls.
///
/// ```
/// use ecs_logger::testing::{RecordedArgs, RecordingEngine};
/// use ecs_logger::{EngineKind, SchemaLogger};
///
/// let engine = RecordingEngine::new(EngineKind::MessageFirst);
/// let logger: SchemaLogger<_> = SchemaLogger::new(engine.clone());
///
/// logger.info("hello", None).unwrap();
///
/// assert_eq!(
///     engine.calls()[0].args,
///     RecordedArgs::MessageFirst("hello".into(), None)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RecordingEngine {
    kind: Arc<Mutex<EngineKind>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    rejected: HashSet<Level>,
}

impl RecordingEngine {
    /// Creates an engine reporting the given calling convention.
    pub fn new(kind: EngineKind) -> Self {
        RecordingEngine {
            kind: Arc::new(Mutex::new(kind)),
            calls: Arc::new(Mutex::new(Vec::new())),
            rejected: HashSet::new(),
        }
    }

    /// Makes calls at `level` fail with [`RecordingError::Rejected`]. Rejected
    /// calls are not recorded.
    pub fn reject(mut self, level: Level) -> Self {
        self.rejected.insert(level);
        self
    }

    /// Changes the calling convention reported from now on.
    pub fn set_kind(&self, kind: EngineKind) {
        *lock(&self.kind) = kind;
    }

    /// Returns the calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Forgets all recorded calls.
    pub fn reset(&self) {
        lock(&self.calls).clear();
    }

    fn record<F>(&self, method: Level, args: Args<'_, F>) -> Result<(), RecordingError>
    where
        F: Serialize + ?Sized,
    {
        if self.rejected.contains(&method) {
            return Err(RecordingError::Rejected(method));
        }
        let capture = |fields: Option<&F>| {
            fields
                .map(serde_json::to_value)
                .transpose()
                .map_err(|err| RecordingError::Capture(err.to_string()))
        };
        let args = match args {
            Args::MessageFirst(message, fields) => {
                RecordedArgs::MessageFirst(message.to_string(), capture(fields)?)
            }
            Args::FieldsFirst(fields, message) => {
                RecordedArgs::FieldsFirst(capture(fields)?, message.to_string())
            }
        };
        lock(&self.calls).push(RecordedCall { method, args });
        Ok(())
    }
}

// A panicking test must not hide the calls recorded before it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Engine for RecordingEngine {
    type Error = RecordingError;

    fn kind(&self) -> EngineKind {
        *lock(&self.kind)
    }

    fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.record(Level::Debug, args)
    }

    fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.record(Level::Info, args)
    }

    fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.record(Level::Warn, args)
    }

    fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.record(Level::Error, args)
    }
}
