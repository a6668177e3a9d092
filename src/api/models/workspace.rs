//
//  bitbucket-cloud-client
//  api/models/workspace.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Cloud workspace model.
//!
//! Workspaces are the top-level container in Bitbucket Cloud: they own
//! projects and repositories and are addressed by their slug.

use serde::{Deserialize, Serialize};

use super::{impl_model, Links};
use crate::api::common::{AdditionalProperties, Field, Timestamp};

/// A Bitbucket Cloud workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    /// Unique identifier for the workspace (includes curly braces).
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    /// URL-safe identifier used in API paths and repository URLs.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub slug: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_private: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub updated_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl_model!(Workspace);
