//! # ECS Logger engine for `tracing`
//!
//! [`TracingEngine`] is an [`Engine`] for
//! [`SchemaLogger`](ecs_logger::SchemaLogger) that emits every call as a
//! [`tracing`](https://docs.rs/tracing) event, so ECS shaped logs flow into
//! whatever subscriber the application installed (`fmt`, an OpenTelemetry
//! bridge, ...).
//!
//! The engine takes its arguments fields first, the way the `tracing`
//! macros are written: `info!(ecs = .., "message")`.
//!
//! Each event has:
//!
//! - the level matching the severity method,
//! - the target `ecs_logger`,
//! - the message as the event's `message` field,
//! - the fields serialized as a JSON object in the `ecs` field. The field is
//!   left out when the call carried no fields.
//!
//! ```
//! use ecs_logger::{Fields, SchemaLogger};
//! use ecs_logger_schema::{Ecs, Event};
//! use ecs_logger_tracing::TracingEngine;
//!
//! let logger: SchemaLogger<_> = SchemaLogger::new(TracingEngine::new());
//!
//! let fields: Fields = Ecs {
//!     event: Some(Event {
//!         action: Some("cache-miss".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! }
//! .into();
//!
//! // emits: WARN ecs_logger: lookup fell through ecs={"event":{"action":"cache-miss"}}
//! logger.warn("lookup fell through", Some(&fields)).unwrap();
//! ```
//!
//! Fields are only serialized when a subscriber is interested in the event.
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

use ecs_logger::{ecs_warn, Args, Engine, EngineKind};
use serde::Serialize;

/// Target of every event emitted by [`TracingEngine`].
pub const TARGET: &str = "ecs_logger";

/// Error returned by [`TracingEngine`].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TracingEngineError {
    /// The fields could not be serialized.
    #[error("failed to serialize log fields: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A fields-first [`Engine`] emitting `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEngine {
    _private: (),
}

impl TracingEngine {
    /// Creates a new `TracingEngine`.
    pub fn new() -> Self {
        TracingEngine::default()
    }
}

fn serialize<F>(args: &Args<'_, F>) -> Result<Option<String>, TracingEngineError>
where
    F: Serialize + ?Sized,
{
    args.fields()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|err| {
            ecs_warn!(name: "TracingEngine.SerializeFailed", error = format!("{err}"));
            TracingEngineError::from(err)
        })
}

// `tracing` needs the level as a constant at every callsite.
macro_rules! emit {
    ($level:expr, $args:expr) => {{
        let args = $args;
        if !tracing::enabled!(target: TARGET, $level) {
            return Ok(());
        }
        match serialize(&args)? {
            Some(fields) => {
                tracing::event!(target: TARGET, $level, ecs = %fields, "{}", args.message())
            }
            None => tracing::event!(target: TARGET, $level, "{}", args.message()),
        }
        Ok(())
    }};
}

impl Engine for TracingEngine {
    type Error = TracingEngineError;

    fn kind(&self) -> EngineKind {
        EngineKind::FieldsFirst
    }

    fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        emit!(tracing::Level::DEBUG, args)
    }

    fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        emit!(tracing::Level::INFO, args)
    }

    fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        emit!(tracing::Level::WARN, args)
    }

    fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized,
    {
        emit!(tracing::Level::ERROR, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecs_logger::{Fields, Level, SchemaLogger};
    use ecs_logger_schema::{Ecs, Event, User};
    use rstest::rstest;
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    #[derive(Clone, Debug, PartialEq)]
    struct CapturedEvent {
        level: tracing::Level,
        message: Option<String>,
        ecs: Option<String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
        diagnostics: Arc<Mutex<Vec<(tracing::Level, &'static str, &'static str)>>>,
    }

    impl CaptureLayer {
        fn events(&self) -> Vec<CapturedEvent> {
            self.events.lock().unwrap().clone()
        }

        fn diagnostics(&self) -> Vec<(tracing::Level, &'static str, &'static str)> {
            self.diagnostics.lock().unwrap().clone()
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        ecs: Option<String>,
    }

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "message" => self.message = Some(format!("{value:?}")),
                "ecs" => self.ecs = Some(format!("{value:?}")),
                _ => {}
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            if metadata.target() != TARGET {
                self.diagnostics.lock().unwrap().push((
                    *metadata.level(),
                    metadata.target(),
                    metadata.name(),
                ));
                return;
            }
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message,
                ecs: visitor.ecs,
            });
        }
    }

    fn capture_layer<R>(f: impl FnOnce() -> R) -> (R, CaptureLayer) {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, layer)
    }

    fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
        let (result, layer) = capture_layer(f);
        (result, layer.events())
    }

    fn login_fields() -> Fields {
        Ecs {
            event: Some(Event {
                action: Some("x".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn reports_fields_first() {
        assert_eq!(TracingEngine::new().kind(), EngineKind::FieldsFirst);
    }

    #[rstest]
    #[case(Level::Debug, tracing::Level::DEBUG)]
    #[case(Level::Info, tracing::Level::INFO)]
    #[case(Level::Warn, tracing::Level::WARN)]
    #[case(Level::Error, tracing::Level::ERROR)]
    fn emits_one_event_per_call(#[case] level: Level, #[case] expected: tracing::Level) {
        let fields = login_fields();
        let (result, events) = capture(|| {
            let logger: SchemaLogger<_> = SchemaLogger::new(TracingEngine::new());
            match level {
                Level::Debug => logger.debug("hello", Some(&fields)),
                Level::Info => logger.info("hello", Some(&fields)),
                Level::Warn => logger.warn("hello", Some(&fields)),
                Level::Error => logger.error("hello", Some(&fields)),
            }
        });

        result.unwrap();
        assert_eq!(
            events,
            vec![CapturedEvent {
                level: expected,
                message: Some("hello".into()),
                ecs: Some(r#"{"event":{"action":"x"}}"#.into()),
            }]
        );
    }

    #[test]
    fn absent_fields_leave_out_the_ecs_field() {
        let (result, events) = capture(|| {
            let logger: SchemaLogger<_> = SchemaLogger::new(TracingEngine::new());
            logger.info("bare", None)
        });

        result.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message.as_deref(), Some("bare"));
        assert_eq!(events[0].ecs, None);
    }

    #[test]
    fn extra_fields_are_serialized_with_schema_fields() {
        #[derive(Serialize)]
        struct Extra {
            shard: u32,
        }

        let fields = Fields::new(
            Ecs {
                user: Some(User {
                    id: Some("u-1".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Extra { shard: 4 },
        );
        let (result, events) = capture(|| {
            let logger: SchemaLogger<_, Extra> = SchemaLogger::new(TracingEngine::new());
            logger.error("with extra", Some(&fields))
        });

        result.unwrap();
        let ecs: serde_json::Value =
            serde_json::from_str(events[0].ecs.as_deref().unwrap()).unwrap();
        assert_eq!(ecs, serde_json::json!({ "user": { "id": "u-1" }, "shard": 4 }));
    }

    #[test]
    fn events_keep_call_order() {
        let (_, events) = capture(|| {
            let logger: SchemaLogger<_> = SchemaLogger::new(TracingEngine::new());
            logger.info("a", None).unwrap();
            logger.warn("b", None).unwrap();
            logger.error("c", None).unwrap();
        });

        let messages: Vec<_> = events.iter().filter_map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn serialization_errors_are_returned() {
        #[derive(Serialize)]
        struct Extra {
            bad: BTreeMap<(u8, u8), u8>,
        }

        let fields = Fields::new(
            Ecs::default(),
            Extra {
                bad: BTreeMap::from([((1, 2), 3)]),
            },
        );
        let (result, events) = capture(|| {
            let logger: SchemaLogger<_, Extra> = SchemaLogger::new(TracingEngine::new());
            logger.warn("boom", Some(&fields))
        });

        assert!(matches!(result, Err(TracingEngineError::Serialize(_))));
        assert!(events.is_empty());
    }

    #[cfg(feature = "internal-logs")]
    #[test]
    fn internal_diagnostics_reach_the_subscriber() {
        #[derive(Serialize)]
        struct Extra {
            bad: BTreeMap<(u8, u8), u8>,
        }

        let fields = Fields::new(
            Ecs::default(),
            Extra {
                bad: BTreeMap::from([((1, 2), 3)]),
            },
        );
        let (result, layer) = capture_layer(|| {
            let logger: SchemaLogger<_, Extra> = SchemaLogger::new(TracingEngine::new());
            logger.info("boom", Some(&fields))
        });

        assert!(result.is_err());
        assert_eq!(
            layer.diagnostics(),
            vec![
                (tracing::Level::DEBUG, "ecs-logger", "SchemaLogger.Created"),
                (
                    tracing::Level::WARN,
                    "ecs-logger-tracing",
                    "TracingEngine.SerializeFailed"
                ),
            ]
        );
    }
}
