//! # ECS Logger engine for the `log` crate
//!
//! [`LogEngine`] is an [`Engine`] for
//! [`SchemaLogger`](ecs_logger::SchemaLogger) that writes every call as a
//! [`log::Record`]. The message becomes the record's arguments. The ECS
//! fields are flattened into dotted key-values (`event.action`,
//! `http.request.method`, ...) attached through the `kv` API of `log`.
//!
//! The engine takes its arguments message first, like the `log` crate
//! renders a record: text, then structured data.
//!
//! ```
//! use ecs_logger::{Fields, SchemaLogger};
//! use ecs_logger_log::LogEngine;
//! use ecs_logger_schema::{Ecs, Service};
//!
//! // Records go to whatever `log` implementation is installed globally.
//! let logger: SchemaLogger<_> = SchemaLogger::new(LogEngine::builder().with_target("shop").build());
//!
//! let fields: Fields = Ecs {
//!     service: Some(Service {
//!         name: Some("checkout".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! }
//! .into();
//!
//! logger.info("order placed", Some(&fields)).unwrap();
//! ```
//!
//! Filtering is left to the `log` implementation: a record is written only
//! when [`log::Log::enabled`] accepts it, and for the global logger only
//! when it is also within [`log::max_level`].
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use std::borrow::Cow;
use std::fmt;

use ecs_logger::{ecs_warn, flatten, Args, Engine, EngineKind, Level};
use log::kv::Value;
use log::{Log, Metadata, Record};
use serde::Serialize;

const DEFAULT_TARGET: &str = "ecs_logger";

/// Error returned by [`LogEngine`].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LogEngineError {
    /// The fields could not be serialized.
    #[error("failed to serialize log fields: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The logger installed with [`log::set_logger`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalLog;

impl Log for GlobalLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

/// A message-first [`Engine`] writing to a [`log::Log`].
pub struct LogEngine<L = GlobalLog> {
    logger: L,
    target: Cow<'static, str>,
}

impl LogEngine {
    /// Creates a builder for a `LogEngine`.
    pub fn builder() -> LogEngineBuilder {
        LogEngineBuilder::default()
    }
}

impl Default for LogEngine {
    fn default() -> Self {
        LogEngine::builder().build()
    }
}

impl<L> LogEngine<L> {
    /// The `log` implementation records are written to.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// The target of every record.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<L: Log> LogEngine<L> {
    fn write<F>(&self, level: Level, args: Args<'_, F>) -> Result<(), LogEngineError>
    where
        F: Serialize + ?Sized,
    {
        let metadata = Metadata::builder()
            .level(map_level(level))
            .target(&self.target)
            .build();
        if !self.logger.enabled(&metadata) {
            return Ok(());
        }

        let fields = args
            .fields()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| {
                ecs_warn!(name: "LogEngine.SerializeFailed", error = format!("{err}"));
                err
            })?;
        let flat = fields.as_ref().map(flatten).unwrap_or_default();
        let key_values: Vec<(&str, Value<'_>)> = flat
            .iter()
            .map(|(key, value)| (key.as_str(), to_kv_value(value)))
            .collect();
        let source: &[(&str, Value<'_>)] = &key_values;

        self.logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{}", args.message()))
                .key_values(&source)
                .build(),
        );
        Ok(())
    }
}

impl<L: Log> Engine for LogEngine<L> {
    type Error = LogEngineError;

    fn kind(&self) -> EngineKind {
        EngineKind::MessageFirst
    }

    fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.write(Level::Debug, args)
    }

    fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.write(Level::Info, args)
    }

    fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.write(Level::Warn, args)
    }

    fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.write(Level::Error, args)
    }
}

impl<L> fmt::Debug for LogEngine<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEngine")
            .field("target", &self.target)
            .finish()
    }
}

/// Builder for [`LogEngine`].
#[derive(Debug)]
pub struct LogEngineBuilder<L = GlobalLog> {
    logger: L,
    target: Cow<'static, str>,
}

impl Default for LogEngineBuilder {
    fn default() -> Self {
        LogEngineBuilder {
            logger: GlobalLog,
            target: Cow::Borrowed(DEFAULT_TARGET),
        }
    }
}

impl<L: Log> LogEngineBuilder<L> {
    /// Sets the target of every record. Defaults to `ecs_logger`.
    pub fn with_target(self, target: impl Into<Cow<'static, str>>) -> Self {
        LogEngineBuilder {
            target: target.into(),
            ..self
        }
    }

    /// Writes to `logger` instead of the global logger.
    pub fn with_logger<T: Log>(self, logger: T) -> LogEngineBuilder<T> {
        LogEngineBuilder {
            logger,
            target: self.target,
        }
    }

    /// Creates the engine.
    pub fn build(self) -> LogEngine<L> {
        LogEngine {
            logger: self.logger,
            target: self.target,
        }
    }
}

fn map_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error => log::Level::Error,
    }
}

fn to_kv_value(value: &serde_json::Value) -> Value<'_> {
    match value {
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Bool(b) => Value::from(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else if let Some(f) = n.as_f64() {
                Value::from(f)
            } else {
                Value::from_display(n)
            }
        }
        // arrays and any other leaf are written as JSON
        other => Value::from_display(other),
    }
}
