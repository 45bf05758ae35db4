//! Macro for string-token identifier enums.
//!
//! Generated enums carry a `Custom(String)` variant so identifiers
//! registered at runtime stay representable. Parsing is infallible;
//! validation happens at catalog lookup, which fails with `NotFound`
//! for any id without a registered descriptor.

#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $token:literal : $display:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
            /// Identifier registered at runtime rather than built in.
            Custom(String),
        }

        impl $name {
            /// Canonical lowercase token, as used in serialized output.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Custom(token) => token.as_str(),
                }
            }

            /// Human-readable display name.
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $display,)+
                    Self::Custom(token) => token.as_str(),
                }
            }

            /// Parses a token. Unknown tokens become `Custom`; callers
            /// validate against the catalog, not here.
            pub fn parse(token: &str) -> Self {
                match token {
                    $($token => Self::$variant,)+
                    other => Self::Custom(other.to_string()),
                }
            }

            /// All built-in (non-`Custom`) identifiers.
            pub const BUILTIN: &'static [$name] = &[$(Self::$variant,)+];

            /// All built-in (non-`Custom`) identifiers.
            pub fn builtin() -> &'static [$name] {
                Self::BUILTIN
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::parse(token)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse(&token))
            }
        }
    };
}
