//! Internal diagnostics for the facade and its engine bridges.
//!
//! [`ecs_debug!`] reports lifecycle events such as a logger being created.
//! [`ecs_warn!`] reports a call that an engine could not carry out. Neither
//! is an application logging API; use [`SchemaLogger`](crate::SchemaLogger)
//! for that.
//!
//! With the `internal-logs` feature they emit `tracing` events named after
//! the operation, with the calling crate as target. Under `cfg(test)` they
//! also print a line to stdout. Otherwise the arguments are evaluated and
//! dropped.
//!
//! The `cfg` checks expand in the calling crate, so crates using these
//! macros declare their own `internal-logs` feature.

#[doc(hidden)]
#[macro_export]
macro_rules! __ecs_internal_log {
    ($level:ident, $name:expr $(, $key:ident = $value:expr)*) => {{
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::$level!(
                name: $name,
                target: env!("CARGO_PKG_NAME"),
                name = $name
                $(, $key = $value)*
            );
        }

        #[cfg(test)]
        {
            println!(
                concat!("ecs_", stringify!($level), ": name={}" $(, ", ", stringify!($key), "={}")*),
                $name $(, $value)*
            );
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = ($name, $($value),*);
        }
    }};
}

/// Reports a lifecycle event of ecs-logger code.
///
/// Takes the operation `name` followed by optional `key = value` pairs.
///
/// ```rust
/// use ecs_logger::ecs_debug;
/// ecs_debug!(name: "Engine.Created", kind = "FieldsFirst");
/// ```
#[macro_export]
macro_rules! ecs_debug {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__ecs_internal_log!(debug, $name $(, $key = $value)*)
    };
}

/// Reports a log call an engine dropped or failed.
///
/// Takes the operation `name` followed by optional `key = value` pairs.
///
/// ```rust
/// use ecs_logger::ecs_warn;
/// ecs_warn!(name: "Engine.SerializeFailed", error = "key must be a string");
/// ```
#[macro_export]
macro_rules! ecs_warn {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__ecs_internal_log!(warn, $name $(, $key = $value)*)
    };
}
