field_set! {
    /// The `event.*` field set: what happened, and how it is classified.
    pub struct Event {
        /// The action captured by the event, e.g. `user-password-change`.
        pub action: String,
        /// Event category, e.g. `authentication`.
        pub category: Vec<String>,
        /// Identification code for this event.
        pub code: String,
        /// Time the event was first read by an agent, RFC 3339.
        pub created: String,
        /// Name of the dataset, e.g. `apache.access`.
        pub dataset: String,
        /// Duration of the event in nanoseconds.
        pub duration: i64,
        /// Event end time, RFC 3339.
        pub end: String,
        /// Unique ID to describe the event.
        pub id: String,
        /// Time the event arrived in the central data store, RFC 3339.
        pub ingested: String,
        /// High-level kind: `alert`, `event`, `metric`, `state`, ...
        pub kind: String,
        /// Name of the module this data is coming from.
        pub module: String,
        /// `success`, `failure` or `unknown`.
        pub outcome: String,
        /// Source of the event, e.g. a log file name.
        pub provider: String,
        /// Reason why this event happened, according to the source.
        pub reason: String,
        /// Risk score or priority of the event.
        pub risk_score: f64,
        /// Sequence number of the event.
        pub sequence: i64,
        /// Numeric severity of the event.
        pub severity: i64,
        /// Event start time, RFC 3339.
        pub start: String,
        /// Time zone offset of the event, e.g. `+02:00`.
        pub timezone: String,
        /// Event type, e.g. `start`, `end`, `change`.
        pub r#type: Vec<String>,
        /// URL of documentation for this event.
        pub url: String,
    }

    /// The `error.*` field set.
    pub struct Error {
        /// Error code describing the error.
        pub code: String,
        /// Unique identifier for the error.
        pub id: String,
        /// Error message.
        pub message: String,
        /// The stack trace of this error in plain text.
        pub stack_trace: String,
        /// The type of the error, e.g. the exception class name.
        pub r#type: String,
    }

    /// The `log.*` field set.
    pub struct Log {
        /// Full path to the log file this event came from.
        pub file: LogFile,
        /// Original log level of the event, e.g. `warn`.
        pub level: String,
        /// Name of the logger inside the application.
        pub logger: String,
        /// Where in the source the event was emitted.
        pub origin: LogOrigin,
    }

    /// The `log.file.*` fields.
    pub struct LogFile {
        /// Full path to the log file.
        pub path: String,
    }

    /// The `log.origin.*` fields.
    pub struct LogOrigin {
        /// Source file of the log call.
        pub file: LogOriginFile,
        /// Function containing the log call.
        pub function: String,
    }

    /// The `log.origin.file.*` fields.
    pub struct LogOriginFile {
        /// Line number of the log call.
        pub line: u32,
        /// File name of the log call.
        pub name: String,
    }
}
