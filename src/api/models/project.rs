//
//  bitbucket-cloud-client
//  api/models/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace projects.
//!
//! Projects group repositories inside a workspace and are addressed by a
//! short uppercase key such as `LEAR`.

use serde::{Deserialize, Serialize};

use super::{impl_model, Account, Links};
use crate::api::common::{AdditionalProperties, Field, Timestamp};

/// A project inside a workspace.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::{Model, Project};
/// use serde_json::json;
///
/// let project = Project::from_value(json!({
///     "type": "project",
///     "key": "LEAR",
///     "name": "Learning",
///     "is_private": true
/// }))
/// .unwrap();
///
/// assert_eq!(project.key.as_option().unwrap(), "LEAR");
/// assert!(project.description.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    /// Short alphanumeric key, unique within the workspace.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub key: Field<String>,

    /// The team or user that owns the project.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub owner: Field<Account>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_private: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub updated_on: Field<Timestamp>,

    /// Whether the private project still contains publicly visible repositories.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub has_publicly_visible_repos: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl_model!(Project);
