//
//  bitbucket-cloud-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Bitbucket Cloud Client Library
//!
//! A typed client for the Bitbucket Cloud REST API 2.0, and the library
//! behind the `bb-cloud` command-line tool.
//!
//! ## Features
//!
//! - **Faithful models**: optional keys remember whether they were missing,
//!   `null` or set, and unknown keys survive a round trip
//! - **Closed enums**: undeclared literals are rejected at parse time
//! - **Two execution modes**: async (tokio) and blocking, same outcome
//! - **Status-driven results**: non-success responses come back unparsed
//!   for the caller to inspect
//! - **OAuth 2.0 client credentials** with a per-process token cache
//!
//! ## Module Structure
//!
//! - [`api`]: client handle, endpoints, models and response mapping
//! - [`auth`]: credentials, token endpoint and token cache
//! - [`config`]: environment configuration
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bitbucket_cloud_client::api::BitbucketClient;
//! use bitbucket_cloud_client::api::cloud::GetWorkspace;
//! use bitbucket_cloud_client::auth::{AuthCredential, TokenCache};
//! use bitbucket_cloud_client::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let cache = TokenCache::new(&config.token_url);
//! let token = cache.get_or_fetch(&config.client_id, &config.client_secret).await?;
//!
//! let client = BitbucketClient::new(&config.api_base_url)?
//!     .with_auth(AuthCredential::bearer(&token.access_token))
//!     .with_timeout(config.timeout);
//!
//! let response = client.send(&GetWorkspace { workspace: "acme" }).await?;
//! println!("HTTP {}", response.status);
//! # Ok(())
//! # }
//! ```

/// API client, endpoints and models.
pub mod api;

/// Authentication credentials and the OAuth client-credentials flow.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Environment configuration.
pub mod config;

pub use api::{ApiError, ApiResponse, BitbucketClient};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// # Value
///
/// `"bb-cloud"`
pub const APP_NAME: &str = "bb-cloud";

/// Application version constant, from `CARGO_PKG_VERSION`.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::VERSION;
///
/// println!("bb-cloud version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// Any failure. Check stderr for details.
    pub const ERROR: i32 = 1;
}
