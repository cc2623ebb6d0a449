//! # ECS Logger engine for OpenTelemetry
//!
//! [`OpenTelemetryEngine`] is an [`Engine`] for
//! [`SchemaLogger`](ecs_logger::SchemaLogger) that turns every call into an
//! OpenTelemetry [`LogRecord`](opentelemetry::logs::LogRecord) and emits it
//! through an [`opentelemetry::logs::Logger`]. Processing and export are
//! configured on the `LoggerProvider`, as for any other log bridge.
//!
//! A record carries:
//!
//! - `SeverityNumber` and `SeverityText` matching the severity method,
//! - the message as the body,
//! - the ECS fields as attributes with dotted keys (`event.action`,
//!   `http.response.status_code`, ...). Arrays become lists, and unsigned
//!   integers above `i64::MAX` become decimal strings.
//!
//! ```
//! use ecs_logger::{Fields, SchemaLogger};
//! use ecs_logger_opentelemetry::OpenTelemetryEngine;
//! use ecs_logger_schema::{Ecs, Event};
//! use opentelemetry_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider};
//!
//! let exporter = InMemoryLogExporter::default();
//! let provider = SdkLoggerProvider::builder()
//!     .with_simple_exporter(exporter.clone())
//!     .build();
//!
//! let logger: SchemaLogger<_> = SchemaLogger::new(OpenTelemetryEngine::new(&provider));
//! let fields: Fields = Ecs {
//!     event: Some(Event {
//!         action: Some("payment".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! }
//! .into();
//!
//! logger.info("payment accepted", Some(&fields)).unwrap();
//! assert_eq!(exporter.get_emitted_logs().unwrap().len(), 1);
//! ```
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

use std::fmt;
use std::time::SystemTime;

use ecs_logger::{ecs_warn, flatten, Args, Engine, EngineKind, Level};
use opentelemetry::logs::{AnyValue, LogRecord, Logger, LoggerProvider, Severity};
use opentelemetry::{InstrumentationScope, Key};
use serde::Serialize;

const INSTRUMENTATION_LIBRARY_NAME: &str = "ecs-logger";

/// Error returned by [`OpenTelemetryEngine`].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OpenTelemetryEngineError {
    /// The fields could not be serialized.
    #[error("failed to serialize log fields: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A message-first [`Engine`] emitting OpenTelemetry log records.
pub struct OpenTelemetryEngine<L> {
    logger: L,
}

impl<L: Logger> OpenTelemetryEngine<L> {
    /// Creates an engine with a logger named `ecs-logger` from `provider`.
    pub fn new<P>(provider: &P) -> Self
    where
        P: LoggerProvider<Logger = L>,
    {
        OpenTelemetryEngine {
            logger: provider.logger(INSTRUMENTATION_LIBRARY_NAME),
        }
    }

    /// Creates an engine with a logger for a custom instrumentation scope.
    pub fn with_scope<P>(provider: &P, scope: InstrumentationScope) -> Self
    where
        P: LoggerProvider<Logger = L>,
    {
        OpenTelemetryEngine {
            logger: provider.logger_with_scope(scope),
        }
    }

    /// Creates an engine emitting through an existing logger.
    pub fn from_logger(logger: L) -> Self {
        OpenTelemetryEngine { logger }
    }

    /// The logger records are emitted through.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    fn emit<F>(&self, level: Level, args: Args<'_, F>) -> Result<(), OpenTelemetryEngineError>
    where
        F: Serialize + ?Sized,
    {
        let fields = args
            .fields()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| {
                ecs_warn!(name: "OpenTelemetryEngine.SerializeFailed", error = format!("{err}"));
                err
            })?;

        let severity = map_severity_to_otel_severity(level);
        let mut record = self.logger.create_log_record();
        record.set_timestamp(SystemTime::now());
        record.set_severity_number(severity);
        record.set_severity_text(severity.name());
        record.set_body(AnyValue::from(args.message().to_owned()));
        if let Some(fields) = &fields {
            for (key, value) in flatten(fields) {
                if let Some(value) = to_any_value(value) {
                    record.add_attribute(Key::from(key), value);
                }
            }
        }
        self.logger.emit(record);
        Ok(())
    }
}

impl<L: Logger> Engine for OpenTelemetryEngine<L> {
    type Error = OpenTelemetryEngineError;

    fn kind(&self) -> EngineKind {
        EngineKind::MessageFirst
    }

    fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.emit(Level::Debug, args)
    }

    fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.emit(Level::Info, args)
    }

    fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.emit(Level::Warn, args)
    }

    fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        self.emit(Level::Error, args)
    }
}

impl<L> fmt::Debug for OpenTelemetryEngine<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTelemetryEngine").finish_non_exhaustive()
    }
}

fn map_severity_to_otel_severity(level: Level) -> Severity {
    match level {
        Level::Debug => Severity::Debug,
        Level::Info => Severity::Info,
        Level::Warn => Severity::Warn,
        Level::Error => Severity::Error,
    }
}

fn to_any_value(value: &serde_json::Value) -> Option<AnyValue> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(AnyValue::from(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(AnyValue::from(i))
            } else if n.is_u64() {
                // above i64::MAX, kept exact
                Some(AnyValue::from(n.to_string()))
            } else {
                n.as_f64().map(AnyValue::from)
            }
        }
        serde_json::Value::String(s) => Some(AnyValue::from(s.clone())),
        serde_json::Value::Array(items) => {
            Some(AnyValue::from_iter(items.iter().filter_map(to_any_value)))
        }
        serde_json::Value::Object(map) => Some(AnyValue::from_iter(map.iter().filter_map(
            |(key, value)| to_any_value(value).map(|value| (Key::from(key.clone()), value)),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecs_logger::{Fields, SchemaLogger};
    use ecs_logger_schema::{Ecs, Event, File, Http, HttpResponse};
    use opentelemetry_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider};
    use rstest::rstest;
    use std::collections::{BTreeMap, HashMap};

    fn setup() -> (InMemoryLogExporter, SdkLoggerProvider) {
        let exporter = InMemoryLogExporter::default();
        let provider = SdkLoggerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        (exporter, provider)
    }

    fn attributes(exporter: &InMemoryLogExporter) -> HashMap<String, AnyValue> {
        let logs = exporter.get_emitted_logs().unwrap();
        logs[0]
            .record
            .attributes_iter()
            .map(|(key, value)| (key.as_str().to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn reports_message_first() {
        let (_exporter, provider) = setup();
        assert_eq!(
            OpenTelemetryEngine::new(&provider).kind(),
            EngineKind::MessageFirst
        );
    }

    #[rstest]
    #[case(Level::Debug, Severity::Debug)]
    #[case(Level::Info, Severity::Info)]
    #[case(Level::Warn, Severity::Warn)]
    #[case(Level::Error, Severity::Error)]
    fn emits_severity_and_body(#[case] level: Level, #[case] expected: Severity) {
        let (exporter, provider) = setup();
        let logger: SchemaLogger<_> = SchemaLogger::new(OpenTelemetryEngine::new(&provider));

        match level {
            Level::Debug => logger.debug("hello", None),
            Level::Info => logger.info("hello", None),
            Level::Warn => logger.warn("hello", None),
            Level::Error => logger.error("hello", None),
        }
        .unwrap();

        let logs = exporter.get_emitted_logs().unwrap();
        assert_eq!(logs.len(), 1);
        let log = &logs[0];
        assert_eq!(log.instrumentation.name(), "ecs-logger");
        assert_eq!(log.record.severity_number(), Some(expected));
        assert_eq!(log.record.severity_text(), Some(expected.name()));
        assert_eq!(log.record.body(), Some(&AnyValue::from("hello")));
        assert_eq!(log.record.attributes_iter().count(), 0);
    }

    #[test]
    fn fields_become_dotted_attributes() {
        let (exporter, provider) = setup();
        let logger: SchemaLogger<_> = SchemaLogger::new(OpenTelemetryEngine::new(&provider));
        let fields: Fields = Ecs {
            event: Some(Event {
                action: Some("x".into()),
                category: Some(vec!["web".into(), "authentication".into()]),
                risk_score: Some(0.5),
                ..Default::default()
            }),
            http: Some(Http {
                response: Some(HttpResponse {
                    status_code: Some(404),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
        .into();

        logger.warn("not found", Some(&fields)).unwrap();

        let attributes = attributes(&exporter);
        assert_eq!(attributes.len(), 4);
        assert_eq!(attributes["event.action"], AnyValue::from("x"));
        assert_eq!(
            attributes["event.category"],
            AnyValue::from_iter(["web", "authentication"])
        );
        assert_eq!(attributes["event.risk_score"], AnyValue::from(0.5));
        assert_eq!(attributes["http.response.status_code"], AnyValue::from(404_i64));
    }

    #[test]
    fn custom_scope_is_used() {
        let (exporter, provider) = setup();
        let scope = InstrumentationScope::builder("checkout")
            .with_version("1.2.3")
            .build();
        let logger: SchemaLogger<_> =
            SchemaLogger::new(OpenTelemetryEngine::with_scope(&provider, scope));

        logger.info("scoped", None).unwrap();

        let logs = exporter.get_emitted_logs().unwrap();
        assert_eq!(logs[0].instrumentation.name(), "checkout");
        assert_eq!(logs[0].instrumentation.version(), Some("1.2.3"));
    }

    #[test]
    fn records_keep_call_order() {
        let (exporter, provider) = setup();
        let logger: SchemaLogger<_> = SchemaLogger::new(OpenTelemetryEngine::new(&provider));

        logger.info("a", None).unwrap();
        logger.warn("b", None).unwrap();
        logger.error("c", None).unwrap();

        let bodies: Vec<AnyValue> = exporter
            .get_emitted_logs()
            .unwrap()
            .iter()
            .filter_map(|log| log.record.body().cloned())
            .collect();
        assert_eq!(
            bodies,
            vec![AnyValue::from("a"), AnyValue::from("b"), AnyValue::from("c")]
        );
    }

    #[test]
    fn serialization_errors_are_returned() {
        #[derive(Serialize)]
        struct Extra {
            bad: BTreeMap<(u8, u8), u8>,
        }

        let (exporter, provider) = setup();
        let logger: SchemaLogger<_, Extra> =
            SchemaLogger::new(OpenTelemetryEngine::new(&provider));
        let fields = Fields::new(
            Ecs::default(),
            Extra {
                bad: BTreeMap::from([((1, 2), 3)]),
            },
        );

        let err = logger.error("boom", Some(&fields)).unwrap_err();

        assert!(matches!(err, OpenTelemetryEngineError::Serialize(_)));
        assert!(exporter.get_emitted_logs().unwrap().is_empty());
    }

    #[test]
    fn unsigned_numbers_above_i64_keep_every_digit() {
        let (exporter, provider) = setup();
        let logger: SchemaLogger<_> = SchemaLogger::new(OpenTelemetryEngine::new(&provider));
        let fields: Fields = Ecs {
            file: Some(File {
                path: Some("/var/lib/big.img".into()),
                size: Some(u64::MAX),
                ..Default::default()
            }),
            ..Default::default()
        }
        .into();

        logger.info("scanned", Some(&fields)).unwrap();

        let attributes = attributes(&exporter);
        assert_eq!(
            attributes["file.size"],
            AnyValue::from("18446744073709551615")
        );
        assert_eq!(
            to_any_value(&serde_json::json!(i64::MAX as u64)),
            Some(AnyValue::from(i64::MAX))
        );
    }

    #[test]
    fn engine_wraps_an_existing_logger() {
        let (exporter, provider) = setup();
        let engine = OpenTelemetryEngine::from_logger(provider.logger("payments"));

        let mut record = engine.logger().create_log_record();
        record.set_body("direct".into());
        engine.logger().emit(record);
        let logger: SchemaLogger<_> = SchemaLogger::new(engine);
        logger.info("through the facade", None).unwrap();

        let logs = exporter.get_emitted_logs().unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs
            .iter()
            .all(|log| log.instrumentation.name() == "payments"));
        assert_eq!(logs[0].record.body(), Some(&AnyValue::from("direct")));
        assert_eq!(
            logs[1].record.body(),
            Some(&AnyValue::from("through the facade"))
        );
    }

    #[test]
    fn objects_inside_arrays_become_maps() {
        let value = serde_json::json!([{ "id": 1, "skip": null }]);

        let converted = to_any_value(&value).unwrap();

        assert_eq!(
            converted,
            AnyValue::from_iter([AnyValue::from_iter([(Key::from("id"), AnyValue::from(1_i64))])])
        );
    }
}
