//
//  bitbucket-cloud-client
//  api/common/string_enum.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Closed sets of string literals used as discriminants inside models.
//!
//! The [`string_enum!`] macro generates a fieldless enum whose variants each
//! map to exactly one wire literal, together with `as_str`, `Display`,
//! `FromStr` and serde impls that all agree on that literal. Matching is
//! exact: no trimming, no case folding.

use thiserror::Error;

/// A string that is not one of the literals declared for an enum type.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::IssueKind;
///
/// let err = "Bug".parse::<IssueKind>().unwrap_err();
/// assert_eq!(err.type_name, "IssueKind");
/// assert_eq!(err.value, "Bug");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {value:?} for {type_name}")]
pub struct InvalidEnumValue {
    /// Name of the enum type that rejected the value.
    pub type_name: &'static str,
    /// The rejected input, verbatim.
    pub value: String,
}

impl InvalidEnumValue {
    pub fn new(type_name: &'static str, value: &str) -> Self {
        Self {
            type_name,
            value: value.to_string(),
        }
    }
}

/// Declares a closed string enum.
///
/// ```rust,ignore
/// string_enum! {
///     /// Markup language of a content block.
///     pub enum ContentMarkup {
///         Markdown => "markdown",
///         Creole => "creole",
///         Plaintext => "plaintext",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every declared variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The wire literal for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::api::common::InvalidEnumValue;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $( $literal => Ok($name::$variant), )+
                    other => Err($crate::api::common::InvalidEnumValue::new(
                        stringify!($name),
                        other,
                    )),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_enum;
