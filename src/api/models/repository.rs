//
//  bitbucket-cloud-client
//  api/models/repository.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Cloud repository models.
//!
//! # Fork Policies
//!
//! * `allow_forks` - Anyone with read access may fork
//! * `no_public_forks` - Forks must stay private
//! * `no_forks` - Forking is disabled
//!
//! # Notes
//!
//! - UUIDs are returned with curly braces (e.g., `{123e4567-e89b-...}`)
//! - `full_name` is `{workspace_slug}/{repo_slug}`

use serde::{Deserialize, Serialize};

use super::{impl_model, Account, Links, Project};
use crate::api::common::{string_enum, AdditionalProperties, Field, Timestamp};

string_enum! {
    /// Who may fork a repository.
    pub enum ForkPolicy {
        AllowForks => "allow_forks",
        NoPublicForks => "no_public_forks",
        NoForks => "no_forks",
    }
}

string_enum! {
    /// Version control system behind a repository.
    pub enum Scm {
        Git => "git",
    }
}

string_enum! {
    /// Filter for repository listings by the caller's relationship to them.
    pub enum RepositoryRole {
        Member => "member",
        Contributor => "contributor",
        Admin => "admin",
        Owner => "owner",
    }
}

/// Reference to a branch, as found in `mainbranch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    /// The name of the branch.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
}

/// A Bitbucket Cloud repository.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::{ForkPolicy, Model, Repository};
/// use bitbucket_cloud_client::api::common::Field;
/// use serde_json::json;
///
/// let repo = Repository::from_value(json!({
///     "type": "repository",
///     "full_name": "acme/site",
///     "fork_policy": "no_public_forks",
///     "size": 0
/// }))
/// .unwrap();
///
/// assert_eq!(repo.fork_policy, Field::Present(ForkPolicy::NoPublicForks));
/// assert_eq!(repo.size, Field::Present(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    /// Full path in format `{workspace_slug}/{repo_slug}`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub slug: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_private: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub fork_policy: Field<ForkPolicy>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub scm: Field<Scm>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub language: Field<String>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub size: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub has_issues: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub has_wiki: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub updated_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub owner: Field<Account>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub project: Field<Project>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub mainbranch: Field<Branch>,

    /// Nullable: `null` when the repository is not a fork.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub parent: Field<Box<Repository>>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl_model!(Branch, Repository);
