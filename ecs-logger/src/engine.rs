use std::sync::Arc;

use serde::Serialize;

/// The calling convention of an [`Engine`]'s severity methods.
///
/// Logging engines disagree on argument order: some take the message first
/// and the structured fields second, others take the fields first. The
/// [`SchemaLogger`](crate::SchemaLogger) decides the kind once, when it is
/// constructed, and arranges every call accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Severity methods receive `(message, fields)`.
    MessageFirst,
    /// Severity methods receive `(fields, message)`.
    FieldsFirst,
}

/// The positional arguments of one severity call, in the order dictated by
/// the engine's [`EngineKind`].
///
/// The fields are borrowed from the caller and never copied. `None` means
/// the caller passed no fields; it is not replaced by an empty object.
#[derive(Debug)]
pub enum Args<'a, F: ?Sized> {
    /// `(message, fields)`
    MessageFirst(&'a str, Option<&'a F>),
    /// `(fields, message)`
    FieldsFirst(Option<&'a F>, &'a str),
}

impl<'a, F: ?Sized> Args<'a, F> {
    /// Arranges `message` and `fields` for an engine of the given kind.
    pub fn new(kind: EngineKind, message: &'a str, fields: Option<&'a F>) -> Self {
        match kind {
            EngineKind::MessageFirst => Args::MessageFirst(message, fields),
            EngineKind::FieldsFirst => Args::FieldsFirst(fields, message),
        }
    }

    /// The calling convention these arguments follow.
    pub fn kind(&self) -> EngineKind {
        match self {
            Args::MessageFirst(..) => EngineKind::MessageFirst,
            Args::FieldsFirst(..) => EngineKind::FieldsFirst,
        }
    }

    /// The human readable message.
    pub fn message(&self) -> &'a str {
        match *self {
            Args::MessageFirst(message, _) | Args::FieldsFirst(_, message) => message,
        }
    }

    /// The structured fields, if the caller passed any.
    pub fn fields(&self) -> Option<&'a F> {
        match *self {
            Args::MessageFirst(_, fields) | Args::FieldsFirst(fields, _) => fields,
        }
    }
}

impl<F: ?Sized> Clone for Args<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for Args<'_, F> {}

/// A logging engine the [`SchemaLogger`](crate::SchemaLogger) forwards to.
///
/// Formatting, filtering and transport are the engine's business. The
/// facade calls exactly one severity method per log call and returns the
/// engine's result unchanged.
pub trait Engine {
    /// Error reported by the engine when a call fails.
    type Error;

    /// The argument order this engine expects.
    fn kind(&self) -> EngineKind;

    /// Handles a debug call.
    fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized;

    /// Handles an info call.
    fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized;

    /// Handles a warn call.
    fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized;

    /// Handles an error call.
    fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
    where
        F: Serialize + ?Sized;
}

macro_rules! impl_engine_for_pointer {
    ($($ptr:ty),+) => {
        $(
            impl<E: Engine> Engine for $ptr {
                type Error = E::Error;

                fn kind(&self) -> EngineKind {
                    (**self).kind()
                }

                fn debug<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
                where
                    F: Serialize + ?Sized,
                {
                    (**self).debug(args)
                }

                fn info<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
                where
                    F: Serialize + ?Sized,
                {
                    (**self).info(args)
                }

                fn warn<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
                where
                    F: Serialize + ?Sized,
                {
                    (**self).warn(args)
                }

                fn error<F>(&self, args: Args<'_, F>) -> Result<(), Self::Error>
                where
                    F: Serialize + ?Sized,
                {
                    (**self).error(args)
                }
            }
        )+
    };
}

impl_engine_for_pointer!(&E, Box<E>, Arc<E>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_first_puts_message_in_front() {
        let fields = 7;
        let args = Args::new(EngineKind::MessageFirst, "hello", Some(&fields));
        assert!(matches!(args, Args::MessageFirst("hello", Some(&7))));
        assert_eq!(args.kind(), EngineKind::MessageFirst);
    }

    #[test]
    fn fields_first_puts_fields_in_front() {
        let fields = 7;
        let args = Args::new(EngineKind::FieldsFirst, "hello", Some(&fields));
        assert!(matches!(args, Args::FieldsFirst(Some(&7), "hello")));
        assert_eq!(args.kind(), EngineKind::FieldsFirst);
    }

    #[test]
    fn accessors_read_either_order() {
        let fields = "f";
        for kind in [EngineKind::MessageFirst, EngineKind::FieldsFirst] {
            let args = Args::new(kind, "m", Some(fields));
            assert_eq!(args.message(), "m");
            assert_eq!(args.fields(), Some("f"));
        }
    }

    #[test]
    fn absent_fields_stay_absent() {
        let args: Args<'_, str> = Args::new(EngineKind::FieldsFirst, "m", None);
        assert!(matches!(args, Args::FieldsFirst(None, "m")));
        assert!(args.fields().is_none());
    }
}
