//! # ECS Logger
//!
//! A logging facade whose calls carry fields shaped by the
//! [Elastic Common Schema](https://www.elastic.co/guide/en/ecs/current/index.html),
//! the taxonomy used to correlate log records across services.
//!
//! The facade does not format, filter or ship anything. It hands each call
//! to an underlying logging [`Engine`] and gets out of the way. What it does
//! own is the call shape:
//!
//! - a uniform four-level API: [`debug`], [`info`], [`warn`] and [`error`],
//!   each taking a message and optional [`Fields`];
//! - argument order. Logging engines disagree on whether the message or the
//!   structured fields come first. [`SchemaLogger`] decides the engine's
//!   [`EngineKind`] once, when it is constructed, and arranges every call to
//!   match;
//! - schema typing. [`Fields`] pairs an [`Ecs`](ecs_logger_schema::Ecs)
//!   document, where every field is optional at every level, with extra
//!   fields of a type fixed per logger.
//!
//! ## Getting Started
//!
//! ```
//! # #[cfg(feature = "testing")]
//! # {
//! use ecs_logger::testing::RecordingEngine;
//! use ecs_logger::{EngineKind, Fields, SchemaLogger};
//! use ecs_logger_schema::{Ecs, Event};
//!
//! let logger: SchemaLogger<_> = SchemaLogger::new(RecordingEngine::new(EngineKind::MessageFirst));
//!
//! let fields: Fields = Ecs {
//!     event: Some(Event {
//!         action: Some("user-login".into()),
//!         outcome: Some("success".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! }
//! .into();
//!
//! logger.info("user logged in", Some(&fields)).unwrap();
//! logger.warn("no fields this time", None).unwrap();
//! # }
//! ```
//!
//! Engine bridges for the `log` crate, `tracing` and OpenTelemetry live in
//! the `ecs-logger-log`, `ecs-logger-tracing` and `ecs-logger-opentelemetry`
//! crates.
//!
//! ## Errors
//!
//! The facade defines no error type of its own. Each severity method returns
//! the engine's `Result` unchanged.
//!
//! ## Crate Feature Flags
//!
//! - `internal-logs` (default): diagnostics of the facade itself are emitted
//!   through `tracing`, see [`ecs_debug!`] and [`ecs_warn!`].
//! - `testing`: the [`testing`] module with an in-memory recording engine.
//!
//! [`debug`]: SchemaLogger::debug
//! [`info`]: SchemaLogger::info
//! [`warn`]: SchemaLogger::warn
//! [`error`]: SchemaLogger::error
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

mod engine;
mod fields;
mod internal_logging;
mod level;
mod logger;

/// In-memory engine for testing purpose.
#[cfg(any(feature = "testing", test))]
#[cfg_attr(docsrs, doc(cfg(any(feature = "testing", test))))]
pub mod testing;

pub use engine::{Args, Engine, EngineKind};
pub use fields::{flatten, Fields, NoExtra};
pub use level::{Level, ParseLevelError};
pub use logger::SchemaLogger;

#[doc(hidden)]
pub mod _private {
    #[cfg(feature = "internal-logs")]
    pub use tracing::{debug, warn};
}
