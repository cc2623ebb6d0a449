/// Declares ECS field sets.
///
/// Each field is written with its inner type and becomes an `Option` that is
/// left out of the serialized document when unset. Field attributes (docs,
/// `#[serde(rename = ..)]`) are carried over.
macro_rules! field_set {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            pub struct $name {
                $(
                    $(#[$field_meta])*
                    #[serde(skip_serializing_if = "Option::is_none")]
                    pub $field: Option<$ty>,
                )*
            }
        )+
    };
}
