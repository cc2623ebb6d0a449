use ecs_logger_schema::Ecs;
use serde::Serialize;
use serde_json::Value;

/// The structured fields of one log call: an ECS document merged with the
/// logger's extra fields.
///
/// Both parts are flattened when serialized, so engines see a single
/// object. `X` is fixed per [`SchemaLogger`](crate::SchemaLogger)
/// instance.
///
/// ```
/// use ecs_logger::Fields;
/// use ecs_logger_schema::{Ecs, Event};
/// use serde::Serialize;
///
/// #[derive(Default, Serialize)]
/// struct Tenant {
///     tenant_id: Option<String>,
/// }
///
/// let fields = Fields {
///     ecs: Ecs {
///         event: Some(Event {
///             action: Some("signup".into()),
///             ..Default::default()
///         }),
///         ..Default::default()
///     },
///     extra: Tenant {
///         tenant_id: Some("t-1".into()),
///     },
/// };
///
/// let json = serde_json::to_value(&fields).unwrap();
/// assert_eq!(json["event"]["action"], "signup");
/// assert_eq!(json["tenant_id"], "t-1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Fields<X = NoExtra> {
    /// The schema fields.
    #[serde(flatten)]
    pub ecs: Ecs,
    /// Caller defined fields serialized next to the schema fields.
    #[serde(flatten)]
    pub extra: X,
}

impl<X> Fields<X> {
    /// Combines schema fields with extra fields.
    pub fn new(ecs: Ecs, extra: X) -> Self {
        Fields { ecs, extra }
    }
}

impl<X: Default> From<Ecs> for Fields<X> {
    fn from(ecs: Ecs) -> Self {
        Fields {
            ecs,
            extra: X::default(),
        }
    }
}

/// Extra fields of a logger that has none. Serializes to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NoExtra {}

/// Flattens a metadata object into dotted keys and leaf values.
///
/// `{"event": {"action": "x"}}` becomes `[("event.action", "x")]`. Arrays
/// are leaves. Nulls and empty objects produce no entries. A root that is
/// not an object is returned as a single entry with an empty key.
pub fn flatten(value: &Value) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    match value {
        Value::Object(_) => flatten_into(String::new(), value, &mut out),
        Value::Null => {}
        leaf => out.push((String::new(), leaf)),
    }
    out
}

fn flatten_into<'v>(prefix: String, value: &'v Value, out: &mut Vec<(String, &'v Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(path, child, out);
            }
        }
        Value::Null => {}
        leaf => out.push((prefix, leaf)),
    }
}
