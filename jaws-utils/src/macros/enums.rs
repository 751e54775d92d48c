#[doc(hidden)]
#[macro_export]
/// A macro which defines a string-keyed enum type.
///
/// Every variant is bound to its canonical wire string (and optional aliases).
/// Matching is ASCII case-insensitive, or exact when declared as
/// `@String @CaseSensitive`. Values which do not match any variant
/// are preserved as-is in the generated `Unknown(String)` variant.
macro_rules! __enum_builder {
    (
        $(#[$m:meta])*
        @String
        @CaseSensitive
        $($rest:tt)*
    ) => {
        $crate::__enum_builder! { @impl match_exact_str; $(#[$m])* $($rest)* }
    };
    (
        $(#[$m:meta])*
        @String
        $($rest:tt)*
    ) => {
        $crate::__enum_builder! { @impl match_ignore_ascii_case_str; $(#[$m])* $($rest)* }
    };
    (
        @impl $matcher:ident;
        $(#[$m:meta])*
        $enum_vis:vis enum $enum_name:ident
        { $( $(#[$enum_meta:meta])* $enum_var:ident => $enum_val:literal $(| $enum_val_alt:literal)* ),* $(,)? }
    ) => {
        $(#[$m])*
        #[derive(Debug, PartialEq, Eq, Clone, Hash)]
        $enum_vis enum $enum_name {
            $(
                $(#[$enum_meta])*
                $enum_var
            ),*
            ,
            /// A value not known by this enum, preserved verbatim.
            Unknown(String)
        }

        impl $enum_name {
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn as_str(&self) -> &str {
                match self {
                    $( $enum_name::$enum_var => $enum_val),*
                    ,$enum_name::Unknown(v) => v,
                }
            }

            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn is_unknown(&self) -> bool {
                matches!(self, $enum_name::Unknown(_))
            }

            /// Same as `FromStr` or `From<&str>` but returning
            /// `None` for unknown values
            $enum_vis fn strict_parse(s: &str) -> Option<Self> {
                $crate::macros::$matcher!(match(s) {
                    $($enum_val $(| $enum_val_alt)* => Some($enum_name::$enum_var)),*
                    , _ => None,
                })
            }
        }

        impl<'a> From<&'a str> for $enum_name {
            fn from(s: &'a str) -> Self {
                $crate::macros::$matcher!(match(s) {
                    $($enum_val $(| $enum_val_alt)* => $enum_name::$enum_var),*
                    , _ => $enum_name::Unknown(s.to_owned()),
                })
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(s.into())
            }
        }

        impl From<String> for $enum_name {
            fn from(s: String) -> Self {
                match Self::strict_parse(&s) {
                    Some(value) => value,
                    None => $enum_name::Unknown(s),
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $enum_name::$enum_var => write!(f, "{}", $enum_val)),*
                    ,$enum_name::Unknown(x) => write!(f, "{x}"),
                }
            }
        }

        impl $crate::macros::enums::__SerdeSerialize for $enum_name {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::macros::enums::__SerdeSerializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::macros::enums::__SerdeDeserialize<'de> for $enum_name {
            #[inline]
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::macros::enums::__SerdeDeserializer<'de>,
            {
                let s = <::std::borrow::Cow<'de, str> as $crate::macros::enums::__SerdeDeserialize<'de>>::deserialize(deserializer)?;
                Ok(s.as_ref().into())
            }
        }
    };
}

#[doc(inline)]
pub use crate::__enum_builder as enum_builder;

#[doc(hidden)]
pub use serde::{
    Deserialize as __SerdeDeserialize, Deserializer as __SerdeDeserializer,
    Serialize as __SerdeSerialize, Serializer as __SerdeSerializer,
};

#[cfg(test)]
mod tests {
    crate::macros::enums::enum_builder! {
        /// Test enum
        @String
        enum Shape {
            Circle => "circle",
            Square => "square" | "box",
        }
    }

    crate::macros::enums::enum_builder! {
        /// Test enum with exact matching
        @String
        @CaseSensitive
        enum Unit {
            Meter => "m",
            MegaMeter => "Mm",
        }
    }

    #[test]
    fn case_sensitive_parse() {
        assert_eq!(Unit::from("m"), Unit::Meter);
        assert_eq!(Unit::from("Mm"), Unit::MegaMeter);
        assert_eq!(Unit::from("M"), Unit::Unknown("M".to_owned()));
        assert_eq!(Unit::from("mm".to_owned()), Unit::Unknown("mm".to_owned()));
        assert!(Unit::strict_parse("MM").is_none());
        let unit: Unit = serde_json::from_str(r#""Mm""#).unwrap();
        assert_eq!(unit, Unit::MegaMeter);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Shape::from("CIRCLE"), Shape::Circle);
        assert_eq!(Shape::from("Box"), Shape::Square);
        assert_eq!(Shape::from("box".to_owned()), Shape::Square);
    }

    #[test]
    fn unknown_is_preserved_verbatim() {
        let shape = Shape::from("Triangle");
        assert_eq!(shape, Shape::Unknown("Triangle".to_owned()));
        assert_eq!(shape.as_str(), "Triangle");
        assert!(shape.is_unknown());
        assert!(Shape::strict_parse("Triangle").is_none());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&Shape::from("BOX")).unwrap();
        assert_eq!(json, r#""square""#);
        let shape: Shape = serde_json::from_str(r#""Circle""#).unwrap();
        assert_eq!(shape, Shape::Circle);
        let shape: Shape = serde_json::from_str(r#""hexagon""#).unwrap();
        assert_eq!(shape.to_string(), "hexagon");
    }
}
