//! Closed enumerations whose values are exchanged as literal strings.
//!
//! WebGPU identifies formats, features, aspects and access modes by exact string values (the same
//! strings a browser returns from the API under test). [`wire_enum!`] generates the enum together
//! with its string table so the two can never drift apart: `as_str`, `Display`, `FromStr`, serde
//! (as the string) and an `ALL` slice in declaration order.

/// Define a `Copy` enum whose variants map 1:1 onto wire strings.
///
/// `$kind` names the value space in parse errors (`"texture format"`, `"feature"`, ...).
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Number of values.
            pub const COUNT: usize = Self::ALL.len();

            /// The exact wire string.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Position of this value in [`Self::ALL`].
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::CatalogError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err($crate::CatalogError::UnknownIdentifier {
                        kind: $kind,
                        name: s.to_string(),
                    }),
                }
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                raw.parse().map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}
