//
//  bitbucket-cloud-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Process configuration, read once from the environment at startup and
//! passed by reference to whatever needs it.
//!
//! ## Environment Variables
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `BITBUCKET_CLIENT_ID` | yes | |
//! | `BITBUCKET_CLIENT_SECRET` | yes | |
//! | `BITBUCKET_API_URL` | no | `https://api.bitbucket.org/2.0` |
//! | `BITBUCKET_TOKEN_URL` | no | `https://bitbucket.org/site/oauth2/access_token` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitbucket_cloud_client::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Talking to {}", config.api_base_url);
//! # Ok::<(), bitbucket_cloud_client::config::ConfigError>(())
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::api::client::CLOUD_API_URL;
use crate::auth::TOKEN_URL;

pub const CLIENT_ID_VAR: &str = "BITBUCKET_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "BITBUCKET_CLIENT_SECRET";
pub const API_URL_VAR: &str = "BITBUCKET_API_URL";
pub const TOKEN_URL_VAR: &str = "BITBUCKET_TOKEN_URL";

/// Request timeout used by the command-line tool.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),
}

/// Immutable process configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// OAuth consumer key.
    pub client_id: String,
    /// OAuth consumer secret.
    pub client_secret: String,
    /// Base URL of the REST API.
    pub api_base_url: String,
    /// OAuth token endpoint.
    pub token_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] naming the first required
    /// variable that is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use bitbucket_cloud_client::config::{Config, ConfigError};
    ///
    /// let vars = HashMap::from([("BITBUCKET_CLIENT_ID", "id")]);
    /// let err = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap_err();
    /// assert_eq!(err, ConfigError::MissingVariable("BITBUCKET_CLIENT_SECRET"));
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVariable(name))
        };

        let client_id = required(CLIENT_ID_VAR)?;
        let client_secret = required(CLIENT_SECRET_VAR)?;

        let api_base_url = lookup(API_URL_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| CLOUD_API_URL.to_string());
        let token_url = lookup(TOKEN_URL_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| TOKEN_URL.to_string());

        Ok(Self {
            client_id,
            client_secret,
            api_base_url,
            token_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}
