//
//  bitbucket-cloud-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to API requests, and the OAuth 2.0
//! client-credentials flow used to obtain them.
//!
//! ## Module Structure
//!
//! - [`AuthCredential`]: what goes into the `Authorization` header
//! - [`oauth`]: token endpoint call and the per-process [`TokenCache`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitbucket_cloud_client::api::BitbucketClient;
//! use bitbucket_cloud_client::auth::{AuthCredential, TokenCache, TOKEN_URL};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cache = TokenCache::new(TOKEN_URL);
//! let token = cache.get_or_fetch("client-id", "client-secret").await?;
//!
//! let client = BitbucketClient::cloud()?
//!     .with_auth(AuthCredential::bearer(&token.access_token));
//! # Ok(())
//! # }
//! ```

mod oauth;

pub use oauth::*;

use base64::{engine::general_purpose::STANDARD, Engine};

/// Credentials sent with every request of a client handle.
///
/// # Variants
///
/// - `Bearer`: OAuth access token or other bearer token
/// - `Basic`: username and app password
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::auth::AuthCredential;
///
/// let credential = AuthCredential::bearer("abc123");
/// assert_eq!(credential.header_value(), "Bearer abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Bearer token authentication.
    Bearer {
        /// The access token.
        token: String,
    },
    /// HTTP Basic authentication.
    Basic {
        /// The Bitbucket username.
        username: String,
        /// The password or app password.
        password: String,
    },
}

impl AuthCredential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The value of the `Authorization` header for this credential.
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer { token } => format!("Bearer {}", token),
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
        }
    }
}
