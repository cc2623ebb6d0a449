use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::{ecs_debug, Args, Engine, EngineKind, Fields, Level, NoExtra};

/// A logger whose calls carry ECS shaped fields, forwarded to an
/// underlying [`Engine`].
///
/// The engine's calling convention is decided once, at construction: either
/// inferred from [`Engine::kind`] or supplied with
/// [`SchemaLogger::with_kind`]. Every severity method then makes exactly one
/// call into the engine method of the same name, with the message and the
/// fields arranged in the engine's order. Fields are passed by reference and
/// never copied or filtered; an absent `fields` reaches the engine as `None`.
///
/// `X` names the extra fields every call of this logger may carry next to
/// the schema fields.
///
/// ```
/// use std::convert::Infallible;
///
/// use ecs_logger::{Args, Engine, EngineKind, Fields, SchemaLogger};
/// use ecs_logger_schema::{Ecs, Event};
/// use serde::Serialize;
///
/// /// Prints `fields message` to stdout.
/// struct Stdout;
///
/// impl Stdout {
///     fn print<F: Serialize + ?Sized>(&self, level: &str, args: Args<'_, F>) {
///         if let Args::FieldsFirst(fields, message) = args {
///             let fields = fields.map(|f| serde_json::to_string(f).unwrap_or_default());
///             println!("{level} {} {message}", fields.unwrap_or_default());
///         }
///     }
/// }
///
/// impl Engine for Stdout {
///     type Error = Infallible;
///
///     fn kind(&self) -> EngineKind {
///         EngineKind::FieldsFirst
///     }
///
///     fn debug<F: Serialize + ?Sized>(&self, args: Args<'_, F>) -> Result<(), Infallible> {
///         Ok(self.print("DEBUG", args))
///     }
///
///     fn info<F: Serialize + ?Sized>(&self, args: Args<'_, F>) -> Result<(), Infallible> {
///         Ok(self.print("INFO", args))
///     }
///
///     fn warn<F: Serialize + ?Sized>(&self, args: Args<'_, F>) -> Result<(), Infallible> {
///         Ok(self.print("WARN", args))
///     }
///
///     fn error<F: Serialize + ?Sized>(&self, args: Args<'_, F>) -> Result<(), Infallible> {
///         Ok(self.print("ERROR", args))
///     }
/// }
///
/// let logger: SchemaLogger<_> = SchemaLogger::new(Stdout);
/// let fields: Fields = Ecs {
///     event: Some(Event {
///         action: Some("x".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// }
/// .into();
///
/// // prints `INFO {"event":{"action":"x"}} hello`
/// logger.info("hello", Some(&fields)).unwrap();
/// logger.debug("no fields", None).unwrap();
/// ```
pub struct SchemaLogger<L, X = NoExtra> {
    logger: L,
    kind: EngineKind,
    _extra: PhantomData<fn(&X)>,
}

impl<L: Engine, X> SchemaLogger<L, X> {
    /// Wraps `logger`, asking it once for its calling convention.
    pub fn new(logger: L) -> Self {
        let kind = logger.kind();
        Self::with_kind(logger, kind)
    }

    /// Wraps `logger` with an explicitly chosen calling convention.
    pub fn with_kind(logger: L, kind: EngineKind) -> Self {
        ecs_debug!(name: "SchemaLogger.Created", kind = format!("{kind:?}"));
        SchemaLogger {
            logger,
            kind,
            _extra: PhantomData,
        }
    }
}

impl<L, X> SchemaLogger<L, X> {
    /// The calling convention used for every call.
    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Returns the wrapped engine, for features this facade does not expose.
    ///
    /// This is the same value passed at construction. Anything done through
    /// it is visible to later calls made through this logger.
    pub fn base_logger(&self) -> &L {
        &self.logger
    }
}

impl<L, X> SchemaLogger<L, X>
where
    L: Engine,
    X: Serialize,
{
    /// Logs `message` at debug level.
    pub fn debug(&self, message: &str, fields: Option<&Fields<X>>) -> Result<(), L::Error> {
        self.log(Level::Debug, message, fields)
    }

    /// Logs `message` at info level.
    pub fn info(&self, message: &str, fields: Option<&Fields<X>>) -> Result<(), L::Error> {
        self.log(Level::Info, message, fields)
    }

    /// Logs `message` at warn level.
    pub fn warn(&self, message: &str, fields: Option<&Fields<X>>) -> Result<(), L::Error> {
        self.log(Level::Warn, message, fields)
    }

    /// Logs `message` at error level.
    pub fn error(&self, message: &str, fields: Option<&Fields<X>>) -> Result<(), L::Error> {
        self.log(Level::Error, message, fields)
    }

    fn log(&self, level: Level, message: &str, fields: Option<&Fields<X>>) -> Result<(), L::Error> {
        let args = Args::new(self.kind, message, fields);
        match level {
            Level::Debug => self.logger.debug(args),
            Level::Info => self.logger.info(args),
            Level::Warn => self.logger.warn(args),
            Level::Error => self.logger.error(args),
        }
    }
}

impl<L: fmt::Debug, X> fmt::Debug for SchemaLogger<L, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaLogger")
            .field("logger", &self.logger)
            .field("kind", &self.kind)
            .finish()
    }
}
