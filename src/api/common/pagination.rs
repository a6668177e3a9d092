//
//  bitbucket-cloud-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Types for Bitbucket Cloud Responses
//!
//! Bitbucket Cloud list endpoints wrap their items in a page envelope and use
//! URL-based pagination: follow the `next` link until it is missing.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::common::Paginated;
//! use bitbucket_cloud_client::api::models::{Model, Project};
//! use serde_json::json;
//!
//! let page = Paginated::<Project>::from_value(json!({
//!     "pagelen": 10,
//!     "page": 1,
//!     "values": [{"type": "project", "key": "LEAR"}],
//!     "next": "https://api.bitbucket.org/2.0/workspaces/acme/projects?page=2"
//! }))
//! .unwrap();
//!
//! assert_eq!(page.items().len(), 1);
//! assert!(page.has_next());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, Field};
use crate::api::models::Model;

/// One page of results from a Bitbucket Cloud list endpoint.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `size` | `Field<i64>` | Total number of items across all pages |
/// | `page` | `Field<i64>` | Current page number (1-indexed) |
/// | `pagelen` | `Field<i64>` | Number of items per page |
/// | `next` | `Field<String>` | URL of the next page |
/// | `previous` | `Field<String>` | URL of the previous page |
/// | `values` | `Field<Vec<T>>` | Items on this page |
///
/// # Notes
///
/// - `size` is omitted by Bitbucket on some endpoints for performance reasons
/// - Page numbers are 1-indexed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned"))]
pub struct Paginated<T> {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub size: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub page: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pagelen: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub next: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub previous: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub values: Field<Vec<T>>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            additional_properties: AdditionalProperties::default(),
            size: Field::Absent,
            page: Field::Absent,
            pagelen: Field::Absent,
            next: Field::Absent,
            previous: Field::Absent,
            values: Field::Absent,
        }
    }
}

impl<T> Paginated<T> {
    /// Checks if there is a next page.
    pub fn has_next(&self) -> bool {
        self.next.is_present()
    }

    /// Gets the URL of the next page, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_option().map(String::as_str)
    }

    /// Items on this page; empty when `values` was absent or null.
    pub fn items(&self) -> &[T] {
        self.values.as_option().map(Vec::as_slice).unwrap_or_default()
    }
}

impl<T: Serialize + DeserializeOwned> Model for Paginated<T> {
    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
