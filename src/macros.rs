/// Creates enums with string values. The syntax is like specifying an enum with numeric values,
/// just with strings instead of numbers.
/// Every created enum has a `Custom(String)` variant which holds values the upstream delivers but
/// which are not known (yet).
///
/// The generated enum implements [`std::fmt::Display`], [`Default`] (`<name>::Custom("")`),
/// [`From<String>`] / [`From<&str>`] (unknown values become `<name>::Custom`) and
/// [`serde::Serialize`] as well as [`serde::Deserialize`].
macro_rules! enum_values {
    ($(#[$attribute:meta])* $v:vis enum $name:ident { $($field:ident = $value:expr)* }) => {
        $(
            #[$attribute]
        )*
        #[derive(Clone, Debug, Eq, PartialEq, Hash)]
        $v enum $name {
            $(
                $field
            ),*,
            Custom(String)
        }

        impl $name {
            /// The raw string value as the upstream delivers it.
            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        $name::$field => $value
                    ),*,
                    $name::Custom(raw) => raw.as_str()
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Custom("".to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $(
                        $value => $name::$field
                    ),*,
                    _ => $name::Custom(value)
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                Ok(Self::from(String::deserialize(deserializer)?))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: serde::ser::Serializer {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// Creates a struct which is used to specify optional query parameters for specific endpoints.
///
/// ```ignore
/// options! {
///     ServerOptions;
///     server_href(String, "serverHref") = None
/// }
/// ```
///
/// Produces a struct with an `Option<String>` field `server_href`, a builder style setter with
/// the same name and `to_query`, which returns all set fields as (`"serverHref"`, value) pairs.
/// Unset fields are not part of the query at all.
macro_rules! options {
    // `$(#[$attribute:meta])*` should generally only be used for `#[doc = "..."]`
    ($name:ident; $($(#[$attribute:meta])* $field:ident($t:ty, $query_name:literal) = $default:expr),*) => {
        #[derive(Clone, Debug, smart_default::SmartDefault)]
        pub struct $name {
            $(
                $(
                    #[$attribute]
                )*
                #[default($default)]
                $field: Option<$t>
            ),*
        }

        impl $name {
            $(
                $(
                    #[$attribute]
                )*
                pub fn $field(mut self, value: $t) -> $name {
                    self.$field = Some(value);

                    self
                }
            )*

            #[allow(dead_code)]
            pub(crate) fn to_query(&self, extra_params: &[(String, String)]) -> Vec<(String, String)> {
                let mut query = extra_params.to_vec();
                $(
                    if let Some(field) = &self.$field {
                        query.push(($query_name.to_string(), field.to_string()));
                    }
                )*
                query
            }
        }
    }
}

pub(crate) use enum_values;
pub(crate) use options;
