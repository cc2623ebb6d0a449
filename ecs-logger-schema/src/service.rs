field_set! {
    /// The `service.*` field set.
    pub struct Service {
        /// Environment the service runs in, e.g. `production`.
        pub environment: String,
        /// Ephemeral identifier of this service.
        pub ephemeral_id: String,
        /// Unique identifier of the running service.
        pub id: String,
        /// Name of the service data is collected from.
        pub name: String,
        /// Name of a service node.
        pub node: ServiceNode,
        /// Current state of the service.
        pub state: String,
        /// The type of the service, e.g. `elasticsearch`.
        pub r#type: String,
        /// Version of the service.
        pub version: String,
    }

    /// The `service.node.*` fields.
    pub struct ServiceNode {
        /// Name of the service node.
        pub name: String,
    }

    /// The `trace.*` field set.
    pub struct Trace {
        /// Unique identifier of the trace.
        pub id: String,
    }

    /// The `transaction.*` field set.
    pub struct Transaction {
        /// Unique identifier of the transaction within the scope of its trace.
        pub id: String,
    }

    /// The `span.*` field set.
    pub struct Span {
        /// Unique identifier of the span within the scope of its trace.
        pub id: String,
    }
}
