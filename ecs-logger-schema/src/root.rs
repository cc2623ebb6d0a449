use std::collections::BTreeMap;

use crate::{
    Agent, Cloud, Container, Endpoint, Error, Event, File, Host, Http, Log, Network,
    Organization, Process, Service, Span, Trace, Transaction, Url, User, UserAgent,
};

/// The ECS version these types follow.
pub const ECS_VERSION: &str = "8.11.0";

field_set! {
    /// A partial ECS document: the base fields plus every field set.
    pub struct Ecs {
        /// Date and time when the event originated, RFC 3339.
        #[serde(rename = "@timestamp")]
        pub timestamp: String,
        /// Custom key/value pairs, e.g. `{"application": "foo-bar"}`.
        pub labels: BTreeMap<String, String>,
        /// Log message optimized for viewing in a log viewer.
        pub message: String,
        /// Keywords used to tag each event.
        pub tags: Vec<String>,

        /// The agent collecting the event.
        pub agent: Agent,
        /// Initiator of a network connection.
        pub client: Endpoint,
        /// Cloud provider metadata.
        pub cloud: Cloud,
        /// Container metadata.
        pub container: Container,
        /// Destination side of a network connection.
        pub destination: Endpoint,
        /// Metadata about the ECS document itself.
        pub ecs: EcsMeta,
        /// Error details.
        pub error: Error,
        /// Event classification and timing.
        pub event: Event,
        /// File details.
        pub file: File,
        /// Host the event happened on.
        pub host: Host,
        /// HTTP request and response.
        pub http: Http,
        /// Log-specific metadata.
        pub log: Log,
        /// Network traffic metadata.
        pub network: Network,
        /// Organization owning the event.
        pub organization: Organization,
        /// Process metadata.
        pub process: Process,
        /// Service the event originates from.
        pub service: Service,
        /// Source side of a network connection.
        pub source: Endpoint,
        /// APM span.
        pub span: Span,
        /// Distributed trace.
        pub trace: Trace,
        /// APM transaction.
        pub transaction: Transaction,
        /// Request URL.
        pub url: Url,
        /// User involved in the event.
        pub user: User,
        /// Parsed `User-Agent` header.
        pub user_agent: UserAgent,
    }

    /// The `ecs.*` field set.
    pub struct EcsMeta {
        /// ECS version this document conforms to.
        pub version: String,
    }
}

impl Ecs {
    /// Returns these fields with `ecs.version` set to [`ECS_VERSION`].
    pub fn with_version(mut self) -> Self {
        self.ecs.get_or_insert_with(EcsMeta::default).version = Some(ECS_VERSION.to_string());
        self
    }
}
