//! # ECS Schema
//!
//! The [Elastic Common Schema](https://www.elastic.co/guide/en/ecs/current/index.html)
//! (ECS) defines a common set of fields for structured log events so that
//! records emitted by different services can be correlated. This crate
//! exposes the ECS field sets as plain Rust types.
//!
//! Every field at every nesting level is optional. A value of [`Ecs`] is a
//! partial ECS document: only the fields that were set are serialized.
//!
//! ```
//! use ecs_logger_schema::{Ecs, Event};
//!
//! let fields = Ecs {
//!     event: Some(Event {
//!         action: Some("user-login".into()),
//!         outcome: Some("success".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! assert!(fields.event.is_some());
//! ```
//!
//! The types carry no behavior beyond `serde` serialization. They are a
//! structural contract checked at compile time.
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

#[macro_use]
mod macros;

mod event;
mod host;
mod network;
mod root;
mod service;
mod user;

pub use event::{Error, Event, Log, LogFile, LogOrigin, LogOriginFile};
pub use host::{
    Agent, Cloud, CloudAccount, CloudInstance, CloudMachine, Container, ContainerImage, File,
    Host, HostOs, Process,
};
pub use network::{Endpoint, Http, HttpBody, HttpRequest, HttpResponse, Network, Url, UserAgent};
pub use root::{Ecs, EcsMeta, ECS_VERSION};
pub use service::{Service, ServiceNode, Span, Trace, Transaction};
pub use user::{Organization, User};
