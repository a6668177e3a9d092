//
//  bitbucket-cloud-client
//  api/cloud/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud API v2.0 operations.
//!
//! Each operation is a struct implementing [`Endpoint`](super::Endpoint):
//! its fields are the path and query parameters, and the trait supplies the
//! method, the documented status codes and the response model.
//!
//! # Module Organization
//!
//! - [`projects`] - Workspace projects
//! - [`workspaces`] - Workspaces
//! - [`users`] - The current user and other accounts
//! - [`repositories`] - Repositories
//! - [`issues`] - Issue tracker and issue comments
//! - [`pipelines`] - Pipeline steps
//! - [`deployments`] - Deployments
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::BitbucketClient;
//! use bitbucket_cloud_client::api::cloud::ListRepositories;
//! use bitbucket_cloud_client::api::common::Field;
//! use bitbucket_cloud_client::api::models::RepositoryRole;
//!
//! let client = BitbucketClient::cloud().unwrap();
//! let request = client
//!     .build_request(&ListRepositories {
//!         workspace: "acme",
//!         role: Field::Present(RepositoryRole::Admin),
//!         q: Field::Absent,
//!         sort: Field::Present("-updated_on"),
//!     })
//!     .unwrap();
//!
//! assert_eq!(request.url, "https://api.bitbucket.org/2.0/repositories/acme");
//! assert_eq!(request.query.get("role"), Some("admin"));
//! assert_eq!(request.query.get("q"), None);
//! ```
//!
//! # Notes
//!
//! - Path parameters are interpolated as given; pre-encode any that contain
//!   reserved characters
//! - UUID parameters include their curly braces (e.g., `{123e4567-...}`)

pub mod deployments;
pub mod issues;
pub mod pipelines;
pub mod projects;
pub mod repositories;
pub mod users;
pub mod workspaces;

pub use deployments::*;
pub use issues::*;
pub use pipelines::*;
pub use projects::*;
pub use repositories::*;
pub use users::*;
pub use workspaces::*;
