//
//  bitbucket-cloud-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The contract every API operation implements.
//!
//! An endpoint is a small struct holding its path and query parameters. The
//! trait describes how to turn it into a request and which status codes the
//! operation documents; the client does the rest.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::{Endpoint, HttpMethod};
//! use bitbucket_cloud_client::api::models::Workspace;
//!
//! struct GetWorkspace<'a> {
//!     workspace: &'a str,
//! }
//!
//! impl Endpoint for GetWorkspace<'_> {
//!     type Output = Workspace;
//!     const METHOD: HttpMethod = HttpMethod::Get;
//!
//!     fn path(&self) -> String {
//!         format!("/workspaces/{}", self.workspace)
//!     }
//! }
//!
//! assert_eq!(GetWorkspace { workspace: "acme" }.path(), "/workspaces/acme");
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::request::{HttpMethod, QueryParams};

/// One Bitbucket API operation.
pub trait Endpoint {
    /// The model decoded from a success response.
    type Output: DeserializeOwned;

    const METHOD: HttpMethod;

    /// Status codes whose body is decoded into [`Output`](Self::Output).
    const SUCCESS: &'static [u16] = &[200];

    /// Non-success status codes the operation documents, e.g. `404`.
    ///
    /// These come back unparsed and never count as unexpected.
    const DOCUMENTED: &'static [u16] = &[];

    /// Path relative to the base URL, with parameters interpolated as-is.
    fn path(&self) -> String;

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    /// JSON request body, if the operation sends one.
    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        Ok(None)
    }

    /// Decodes a success body.
    fn decode(body: &[u8]) -> Result<Self::Output, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
