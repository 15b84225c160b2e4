//! Wire enums shared by request options and response models.
//!
//! Every enum generated by `api_enum!` carries an extra `UnknownValue`
//! variant so responses from a newer service version still deserialize.
//! Request builders reject `UnknownValue`, and `ApiEnum::parse` turns a raw
//! string into a variant or an `InvalidEnumValue` naming the allowed set.

use crate::error::ApiError;

/// Wire string used for values the client does not recognize.
pub const UNKNOWN_ENUM_VALUE: &str = "UNKNOWN_ENUM_VALUE";

pub trait ApiEnum: Copy + Sized + 'static {
    /// Every wire value the service documents, in declaration order.
    const ALLOWED: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self>;

    fn is_known(&self) -> bool {
        self.as_str() != UNKNOWN_ENUM_VALUE
    }

    /// Parse a caller-supplied string for the parameter named `parameter`.
    fn parse(parameter: &'static str, value: &str) -> Result<Self, ApiError> {
        Self::from_wire(value).ok_or_else(|| ApiError::InvalidEnumValue {
            parameter,
            value: value.to_string(),
            allowed: Self::ALLOWED,
        })
    }
}

macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value this version of the client does not recognize.
            #[serde(rename = "UNKNOWN_ENUM_VALUE", other)]
            UnknownValue,
        }

        impl $crate::enums::ApiEnum for $name {
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::UnknownValue => $crate::enums::UNKNOWN_ENUM_VALUE,
                }
            }

            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::ApiEnum::as_str(self))
            }
        }
    };
}

pub(crate) use api_enum;

api_enum! {
    /// Sort direction accepted by every list operation.
    pub enum SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}
