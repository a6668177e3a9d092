//
//  bitbucket-cloud-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Bitbucket Cloud REST API 2.0.
//!
//! ## Architecture
//!
//! One call flows through four pieces:
//!
//! 1. an [`Endpoint`] value holding the call's parameters
//! 2. [`BitbucketClient::build_request`] turns it into a [`RequestDescriptor`]
//! 3. the descriptor is executed by `reqwest`, async or blocking
//! 4. [`map_response`] turns the [`RawResponse`] into an [`ApiResponse`]
//!
//! - [`client`]: the immutable client handle and both execution modes
//! - [`request`]: request descriptors and query parameters
//! - [`response`]: response results and status mapping
//! - [`endpoint`]: the per-operation contract
//! - [`cloud`]: the operations themselves
//! - [`models`]: resource models
//! - [`common`]: field, bag, enum and pagination building blocks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitbucket_cloud_client::api::BitbucketClient;
//! use bitbucket_cloud_client::api::cloud::GetRepository;
//! use bitbucket_cloud_client::auth::AuthCredential;
//!
//! let client = BitbucketClient::cloud()?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let response = client.send_blocking(&GetRepository {
//!     workspace: "acme",
//!     repo_slug: "site",
//! })?;
//!
//! if response.status == 404 {
//!     println!("No such repository");
//! }
//! # Ok::<(), bitbucket_cloud_client::api::ApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Only transport failures, malformed success bodies and (when enabled)
//! undocumented status codes are [`ApiError`]s. Every other non-success
//! status comes back as an [`ApiResponse`] with `parsed: None`.

pub mod client;
pub mod cloud;
pub mod common;
pub mod endpoint;
pub mod models;
pub mod request;
pub mod response;

pub use client::BitbucketClient;
pub use common::ApiError;
pub use endpoint::Endpoint;
pub use request::{HttpMethod, QueryParams, RequestDescriptor};
pub use response::{format_api_error, map_response, ApiResponse, RawResponse};
