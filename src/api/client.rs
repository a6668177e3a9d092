//
//  bitbucket-cloud-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Handle for the Bitbucket Cloud API
//!
//! [`BitbucketClient`] holds everything shared by every call: base URL,
//! default headers and cookies, timeout, TLS verification, redirect policy
//! and credentials. It is configured once with the `with_*` builder methods
//! and then only read, so one handle can serve any number of concurrent
//! calls.
//!
//! ## Execution Modes
//!
//! - [`BitbucketClient::send`] - suspends on the network round trip (tokio)
//! - [`BitbucketClient::send_blocking`] - waits on the current thread
//!
//! Both build the same [`RequestDescriptor`], perform exactly one request
//! and map the response the same way. Nothing is retried.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitbucket_cloud_client::api::BitbucketClient;
//! use bitbucket_cloud_client::api::cloud::GetProject;
//! use bitbucket_cloud_client::auth::AuthCredential;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = BitbucketClient::cloud()?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let response = client
//!     .send(&GetProject { workspace: "acme", project_key: "LEAR" })
//!     .await?;
//!
//! match response.parsed {
//!     Some(project) => println!("{:?}", project.name),
//!     None => println!("HTTP {}", response.status),
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use super::common::ApiError;
use super::endpoint::Endpoint;
use super::request::RequestDescriptor;
use super::response::{map_response, ApiResponse, RawResponse};
use crate::auth::AuthCredential;

/// Base URL of the Bitbucket Cloud REST API 2.0.
pub const CLOUD_API_URL: &str = "https://api.bitbucket.org/2.0";

fn user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

/// Immutable handle shared by every request.
///
/// # Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | headers / cookies | none |
/// | timeout | none (transport default) |
/// | `verify_ssl` | `true` |
/// | `follow_redirects` | `false` |
/// | `raise_on_unexpected_status` | `false` |
///
/// # Notes
///
/// - The underlying `reqwest` clients are created on first use and reused.
/// - `send_blocking` must not be called from inside an async runtime; use
///   `send` there.
#[derive(Debug)]
pub struct BitbucketClient {
    base_url: String,
    headers: BTreeMap<String, String>,
    cookies: BTreeMap<String, String>,
    timeout: Option<Duration>,
    verify_ssl: bool,
    follow_redirects: bool,
    raise_on_unexpected_status: bool,
    auth: Option<AuthCredential>,
    http: OnceCell<reqwest::Client>,
    blocking: OnceCell<reqwest::blocking::Client>,
}

impl BitbucketClient {
    /// Creates a handle for the API at `base_url`.
    ///
    /// A trailing `/` is dropped so endpoint paths can start with one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` does not parse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_cloud_client::api::BitbucketClient;
    ///
    /// let client = BitbucketClient::new("http://127.0.0.1:8080/2.0/").unwrap();
    /// assert_eq!(client.base_url(), "http://127.0.0.1:8080/2.0");
    ///
    /// assert!(BitbucketClient::new("not a url").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            timeout: None,
            verify_ssl: true,
            follow_redirects: false,
            raise_on_unexpected_status: false,
            auth: None,
            http: OnceCell::new(),
            blocking: OnceCell::new(),
        })
    }

    /// Creates a handle for `https://api.bitbucket.org/2.0`.
    pub fn cloud() -> Result<Self, ApiError> {
        Self::new(CLOUD_API_URL)
    }

    /// Sets the credentials sent as the `Authorization` header.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a cookie sent with every request.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Bounds each call. Expiry surfaces as [`ApiError::Transport`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Turning verification off accepts invalid TLS certificates.
    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    /// Makes undocumented status codes fail with [`ApiError::UnexpectedStatus`].
    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    /// Builds the request for `endpoint` without touching the network.
    ///
    /// Default headers, cookies and timeout are attached unchanged. The
    /// credential adds `Authorization`; a JSON body adds `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the endpoint body cannot be serialized.
    pub fn build_request<E: Endpoint>(&self, endpoint: &E) -> Result<RequestDescriptor, ApiError> {
        let mut headers = self.headers.clone();

        if let Some(auth) = &self.auth {
            headers.insert(AUTHORIZATION.as_str().to_string(), auth.header_value());
        }

        let body = endpoint.body().map_err(ApiError::Encode)?;
        if body.is_some() {
            headers.insert(
                CONTENT_TYPE.as_str().to_string(),
                "application/json".to_string(),
            );
        }

        Ok(RequestDescriptor {
            method: E::METHOD,
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers,
            cookies: self.cookies.clone(),
            timeout: self.timeout,
            query: endpoint.query(),
            body,
        })
    }

    /// Performs one request and returns the raw response.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .http_client()?
            .request(request.method.into(), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(request.query.as_slice());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(cookie) = request.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Blocking counterpart of [`execute`](Self::execute).
    pub fn execute_blocking(&self, request: &RequestDescriptor) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .blocking_client()?
            .request(request.method.into(), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(request.query.as_slice());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(cookie) = request.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes()?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Calls `endpoint`, suspending while the request is in flight.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] for connection, TLS or timeout failures
    /// - [`ApiError::Decode`] for a malformed body on a success status
    /// - [`ApiError::UnexpectedStatus`] if enabled and the status is undocumented
    ///
    /// Any other non-success status is returned with `parsed: None`.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<ApiResponse<E::Output>, ApiError> {
        let request = self.build_request(endpoint)?;
        debug!("{} {}", request.method, request.url);

        let raw = self.execute(&request).await?;
        debug!("HTTP {} from {}", raw.status, request.url);

        map_response::<E>(raw, self.raise_on_unexpected_status)
    }

    /// Calls `endpoint` on the current thread, with the same outcome as
    /// [`send`](Self::send).
    pub fn send_blocking<E: Endpoint>(&self, endpoint: &E) -> Result<ApiResponse<E::Output>, ApiError> {
        let request = self.build_request(endpoint)?;
        debug!("{} {} (blocking)", request.method, request.url);

        let raw = self.execute_blocking(&request)?;
        debug!("HTTP {} from {}", raw.status, request.url);

        map_response::<E>(raw, self.raise_on_unexpected_status)
    }

    fn redirect_policy(&self) -> Policy {
        if self.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        }
    }

    fn http_client(&self) -> Result<&reqwest::Client, ApiError> {
        let client = self.http.get_or_try_init(|| {
            reqwest::Client::builder()
                .user_agent(user_agent())
                .danger_accept_invalid_certs(!self.verify_ssl)
                .redirect(self.redirect_policy())
                .build()
        })?;
        Ok(client)
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, ApiError> {
        let client = self.blocking.get_or_try_init(|| {
            reqwest::blocking::Client::builder()
                .user_agent(user_agent())
                .danger_accept_invalid_certs(!self.verify_ssl)
                .redirect(self.redirect_policy())
                .build()
        })?;
        Ok(client)
    }
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::cloud::{CreateIssueComment, GetProject};
    use crate::api::models::{Content, IssueComment};
    use crate::api::request::HttpMethod;

    #[test]
    fn test_cloud_defaults() {
        let client = BitbucketClient::cloud().unwrap();
        assert_eq!(client.base_url(), "https://api.bitbucket.org/2.0");
        assert!(client.verify_ssl());
        assert!(!client.follow_redirects());
        assert!(!client.raise_on_unexpected_status());
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BitbucketClient::new("api.bitbucket.org/2.0").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_build_request_attaches_handle_defaults() {
        let client = BitbucketClient::new("https://api.bitbucket.org/2.0/")
            .unwrap()
            .with_header("X-Trace", "abc")
            .with_cookie("session", "s1")
            .with_timeout(Duration::from_secs(5))
            .with_auth(AuthCredential::bearer("tok"));

        let request = client
            .build_request(&GetProject {
                workspace: "acme",
                project_key: "LEAR",
            })
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://api.bitbucket.org/2.0/workspaces/acme/projects/LEAR"
        );
        assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(
            request.headers.get("authorization").map(String::as_str),
            Some("Bearer tok")
        );
        assert!(!request.headers.contains_key("content-type"));
        assert_eq!(request.cookie_header().as_deref(), Some("session=s1"));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_request_with_body_sets_content_type() {
        let client = BitbucketClient::cloud().unwrap();
        let endpoint = CreateIssueComment {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "42",
            body: IssueComment {
                content: Content::raw("Fixed in a1b2c3d").into(),
                ..IssueComment::new()
            },
        };

        let request = client.build_request(&endpoint).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            request.body.unwrap()["content"]["raw"],
            serde_json::json!("Fixed in a1b2c3d")
        );
    }
}
