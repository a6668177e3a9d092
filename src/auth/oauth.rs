//
//  bitbucket-cloud-client
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # OAuth 2.0 Client Credentials
//!
//! Exchanges an OAuth consumer's key and secret for an access token:
//!
//! ```text
//! POST https://bitbucket.org/site/oauth2/access_token
//! Authorization: Basic base64(client_id:client_secret)
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=client_credentials
//! ```
//!
//! ## Token Cache
//!
//! [`TokenCache`] keeps one token per (client id, client secret) pair for
//! the life of the process.
//!
//! ## Known Limitation
//!
//! Cached tokens are never checked against their `expires_in`. A process
//! that outlives its token keeps sending the stale one and gets `401`s.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::common::{string_enum, AdditionalProperties, Field};
use crate::api::models::impl_model;
use crate::config::DEFAULT_TIMEOUT;

/// Bitbucket Cloud OAuth token endpoint.
pub const TOKEN_URL: &str = "https://bitbucket.org/site/oauth2/access_token";

string_enum! {
    /// Token type returned by the token endpoint.
    pub enum TokenType {
        Bearer => "bearer",
    }
}

/// Token endpoint response.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `access_token` | Token to send as `Authorization: Bearer ...` |
/// | `token_type` | Always `bearer` |
/// | `scopes` | Space-separated granted scopes |
/// | `expires_in` | Lifetime in seconds |
/// | `state` | Grant type echo, e.g. `client_credentials` |
/// | `refresh_token` | Refresh token, unused by this crate |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthToken {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    pub access_token: String,

    pub token_type: TokenType,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub scopes: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub expires_in: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub state: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub refresh_token: Field<String>,
}

impl_model!(OAuthToken);

/// Requests a token with the client-credentials grant.
///
/// # Errors
///
/// Fails on transport errors (including `timeout` elapsing), a non-success
/// status (the message includes the status and body) or a response that is
/// not a token.
pub async fn fetch_client_credentials_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    timeout: Duration,
) -> Result<OAuthToken> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .context("Failed to request access token")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Token request failed ({})", status))?;
        anyhow::bail!("Token request failed ({}): {}", status, body);
    }

    let token: OAuthToken = response
        .json()
        .await
        .context("Failed to parse token response")?;

    Ok(token)
}

/// Process-lifetime memo of access tokens, keyed by client credentials.
///
/// The lock is held across the fetch, so concurrent first calls for the
/// same pair still issue a single request.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use bitbucket_cloud_client::auth::{TokenCache, TOKEN_URL};
///
/// # async fn example() -> anyhow::Result<()> {
/// let cache = TokenCache::new(TOKEN_URL);
/// let first = cache.get_or_fetch("id", "secret").await?;
/// let second = cache.get_or_fetch("id", "secret").await?;
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TokenCache {
    token_url: String,
    timeout: Duration,
    tokens: Mutex<HashMap<(String, String), Arc<OAuthToken>>>,
}

impl TokenCache {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            timeout: DEFAULT_TIMEOUT,
            tokens: Mutex::new(HashMap::new()),
        }
    }

    /// Bounds each token request. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the cached token for the pair, fetching it on first use.
    pub async fn get_or_fetch(&self, client_id: &str, client_secret: &str) -> Result<Arc<OAuthToken>> {
        let mut tokens = self.tokens.lock().await;
        let key = (client_id.to_string(), client_secret.to_string());

        if let Some(token) = tokens.get(&key) {
            debug!("Using cached access token for client {}", client_id);
            return Ok(Arc::clone(token));
        }

        let token = Arc::new(
            fetch_client_credentials_token(&self.token_url, client_id, client_secret, self.timeout)
                .await?,
        );
        info!("Fetched access token for client {}", client_id);

        tokens.insert(key, Arc::clone(&token));
        Ok(token)
    }

    pub async fn len(&self) -> usize {
        self.tokens.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Model;
    use serde_json::json;

    #[test]
    fn test_token_response_parses() {
        let token = OAuthToken::from_value(json!({
            "access_token": "abc",
            "scopes": "project repository",
            "token_type": "bearer",
            "expires_in": 7200,
            "state": "client_credentials",
            "refresh_token": "def"
        }))
        .unwrap();

        assert_eq!(token.token_type, TokenType::Bearer);
        assert_eq!(token.expires_in, Field::Present(7200));
        assert!(token.additional_properties().is_empty());
    }

    #[test]
    fn test_other_token_type_is_rejected() {
        assert!(OAuthToken::from_value(json!({
            "access_token": "abc",
            "token_type": "mac"
        }))
        .is_err());
    }

    #[tokio::test]
    async fn test_new_cache_is_empty() {
        let cache = TokenCache::new(TOKEN_URL);
        assert!(cache.is_empty().await);
        assert_eq!(cache.token_url(), TOKEN_URL);
        assert_eq!(cache.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_timeout() {
        let cache = TokenCache::new(TOKEN_URL).with_timeout(Duration::from_secs(3));
        assert_eq!(cache.timeout(), Duration::from_secs(3));
    }
}
