//
//  bitbucket-cloud-client
//  api/models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud resource models.
//!
//! One struct per resource shape. Each model follows the same convention:
//!
//! - required keys are plain fields;
//! - optional keys are [`Field`](crate::api::common::Field) values with
//!   `#[serde(default, skip_serializing_if = "Field::is_absent")]`;
//! - undeclared keys land in a flattened
//!   [`AdditionalProperties`] bag, declared first so that it is written
//!   before the declared fields.
//!
//! Polymorphic objects (deployment and pipeline step states) are enums
//! internally tagged on the wire `type` key, with one struct per variant.
//! They serialize through [`serialize_tagged`], which writes the tag after
//! the variant's own keys so a stray `type` in its bag cannot replace it.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::models::{Account, Model};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "type": "user",
//!     "display_name": "Ada",
//!     "x": 1
//! });
//!
//! let account = Account::from_value(payload.clone()).unwrap();
//! assert_eq!(account.additional_properties().get("x").unwrap(), &json!(1));
//! assert_eq!(account.to_value().unwrap(), payload);
//! ```

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::api::common::AdditionalProperties;

mod account;
mod deployment;
mod error;
mod issue;
mod pipeline;
mod project;
mod repository;
mod workspace;

pub use account::*;
pub use deployment::*;
pub use error::*;
pub use issue::*;
pub use pipeline::*;
pub use project::*;
pub use repository::*;
pub use workspace::*;

/// Parse and serialize operations shared by every resource model.
pub trait Model: Serialize + DeserializeOwned {
    /// Keys from the payload that this model does not declare.
    fn additional_properties(&self) -> &AdditionalProperties;

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    /// Builds the model from a decoded JSON value.
    ///
    /// Unknown keys never cause a failure. A missing required key, a wrong
    /// value type or an undeclared enum literal does.
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serializes to a JSON value.
    ///
    /// Bag entries are written first and declared fields after them, so a
    /// declared field replaces a same-named stray bag entry.
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Serializes to a JSON string via [`to_value`](Self::to_value).
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_value()?)
    }
}

/// Implements [`Model`] for structs holding an `additional_properties` field.
macro_rules! impl_model {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl $crate::api::models::Model for $ty {
                fn additional_properties(&self) -> &$crate::api::common::AdditionalProperties {
                    &self.additional_properties
                }

                fn additional_properties_mut(
                    &mut self,
                ) -> &mut $crate::api::common::AdditionalProperties {
                    &mut self.additional_properties
                }
            }
        )+
    };
}

pub(crate) use impl_model;

/// Serializes one variant of a `type`-tagged enum, tag last.
pub(crate) fn serialize_tagged<S, T>(
    serializer: S,
    tag: &'static str,
    variant: &T,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut value = serde_json::to_value(variant).map_err(S::Error::custom)?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("type".to_string(), Value::String(tag.to_string()));
        }
        None => return Err(S::Error::custom(format!("{tag} variant is not an object"))),
    }
    value.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declared_field_wins_over_stray_bag_entry() {
        let mut account = Account::from_value(json!({
            "type": "user",
            "nickname": "ada"
        }))
        .unwrap();
        account
            .additional_properties_mut()
            .set("nickname", json!("stray"));

        let value = account.to_value().unwrap();
        assert_eq!(value["nickname"], json!("ada"));
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_bag_entries_are_written_first() {
        let account = Account::from_value(json!({
            "type": "user",
            "extra": true
        }))
        .unwrap();

        let json = account.to_json().unwrap();
        assert_eq!(json, r#"{"extra":true,"type":"user"}"#);
    }
}
