//
//  bitbucket-cloud-client
//  api/common/field.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Tri-state optional field values.
//!
//! Bitbucket payloads distinguish three situations for an optional key:
//!
//! | Wire form | [`Field`] |
//! |-----------|-----------|
//! | key missing | [`Field::Absent`] |
//! | `"key": null` | [`Field::Null`] |
//! | `"key": <value>` | [`Field::Present`] |
//!
//! Every optional model field is declared as:
//!
//! ```rust,ignore
//! #[serde(default, skip_serializing_if = "Field::is_absent")]
//! pub description: Field<String>,
//! ```
//!
//! so that a missing key parses to `Absent` and an `Absent` field is left out
//! of the serialized output. Falsy values (`false`, `0`, `""`) are always
//! `Present` and always written back.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional value that remembers whether it was missing, null, or set.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::common::Field;
///
/// let set: Field<bool> = false.into();
/// assert!(set.is_present());
/// assert_eq!(set.as_option(), Some(&false));
///
/// let missing: Field<bool> = Field::default();
/// assert!(missing.is_absent());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was not part of the payload.
    Absent,
    /// The key was present with a JSON `null`.
    Null,
    /// The key was present with a value.
    Present(T),
}

impl<T> Field<T> {
    /// Converts an `Option`, mapping `None` to [`Field::Absent`].
    ///
    /// Use this when building outgoing payloads where "not given" should
    /// leave the key out entirely.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(value),
        }
    }

    pub fn as_mut(&mut self) -> Field<&mut T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(value),
        }
    }

    /// Returns the value if present. Both `Absent` and `Null` yield `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(f(value)),
        }
    }

    /// Replaces the field with `Absent`, returning the previous state.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Null => f.write_str("Null"),
            Self::Present(value) => f.debug_tuple("Present").field(value).finish(),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent only reaches here when a caller forgot skip_serializing_if
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Present(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key never reaches this impl: `#[serde(default)]` supplies Absent.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        })
    }
}
