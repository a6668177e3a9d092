//
//  bitbucket-cloud-client
//  api/common/properties.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Catch-all storage for payload keys a model does not declare.
//!
//! Bitbucket adds keys to its objects over time. Every model flattens an
//! [`AdditionalProperties`] bag into itself so those keys survive a
//! parse/serialize round trip untouched.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::common::AdditionalProperties;
//! use serde_json::json;
//!
//! let mut extra = AdditionalProperties::new();
//! extra.set("x", json!(1));
//!
//! assert!(extra.contains("x"));
//! assert_eq!(extra.get("x").unwrap(), &json!(1));
//! assert!(extra.remove("missing").is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Lookup or removal of a key that the bag does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Key not found: {0}")]
pub struct KeyNotFound(pub String);

/// Unrecognized wire keys, kept verbatim in insertion order.
///
/// The bag only ever sees keys that no declared field of the owning model
/// claimed during parsing. Values are stored as raw JSON with no coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalProperties(Map<String, Value>);

impl AdditionalProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when the key is not in the bag.
    pub fn get(&self, key: &str) -> Result<&Value, KeyNotFound> {
        self.0.get(key).ok_or_else(|| KeyNotFound(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, KeyNotFound> {
        self.0
            .get_mut(key)
            .ok_or_else(|| KeyNotFound(key.to_string()))
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Removes `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when the key is not in the bag.
    pub fn remove(&mut self, key: &str) -> Result<Value, KeyNotFound> {
        self.0.remove(key).ok_or_else(|| KeyNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in insertion order. The order is not part of the contract.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AdditionalProperties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for AdditionalProperties {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
