//
//  bitbucket-cloud-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for Bitbucket Cloud
//!
//! This module provides the building blocks every model and endpoint shares:
//!
//! - [`ApiError`] - Unified error type for request execution and decoding
//! - [`Field`] - Tri-state optional value (absent / null / present)
//! - [`AdditionalProperties`] - Bag for wire keys a model does not declare
//! - [`InvalidEnumValue`] - Rejection of an undeclared enum literal
//! - [`Timestamp`] - RFC 3339 time that serializes back to its wire text
//! - [`Paginated`] - Cloud page envelope (re-exported from [`pagination`])
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::common::ApiError;
//!
//! fn describe(err: &ApiError) -> String {
//!     match err {
//!         ApiError::UnexpectedStatus { status, .. } => format!("got HTTP {}", status),
//!         ApiError::Decode { status, .. } => format!("bad body on HTTP {}", status),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - A non-success status code is not an error: the response comes back with
//!   `parsed: None` and the caller branches on the status.
//! - Nothing in this module retries.

use thiserror::Error;

mod field;
mod pagination;
mod properties;
mod string_enum;
mod timestamp;

pub use field::*;
pub use pagination::*;
pub use properties::*;
pub use string_enum::InvalidEnumValue;
pub(crate) use string_enum::string_enum;
pub use timestamp::Timestamp;

/// Unified error type for all Bitbucket API operations.
///
/// # Variants
///
/// | Variant | When |
/// |---------|------|
/// | `Transport` | Connection, TLS or timeout failure |
/// | `Decode` | Success status with a body that is not the expected JSON |
/// | `Encode` | Request body could not be serialized |
/// | `UnexpectedStatus` | Undocumented status with `raise_on_unexpected_status` set |
/// | `InvalidBaseUrl` | Client handle created with a malformed base URL |
///
/// # Notes
///
/// - The `Transport` variant converts from `reqwest::Error` unchanged
/// - Transport errors are never retried internally
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body of a success response could not be decoded.
    #[error("Failed to decode response body (HTTP {status}): {source}")]
    Decode {
        /// Status code of the response whose body failed to decode.
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The server answered with a status code the endpoint does not document.
    ///
    /// Only produced when the client was built with
    /// `with_raise_on_unexpected_status(true)`.
    #[error("Unexpected status code {status}: {body}")]
    UnexpectedStatus {
        /// The undocumented status code.
        status: u16,
        /// The raw body, lossily decoded as UTF-8.
        body: String,
    },

    /// The base URL given to the client handle is not a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
