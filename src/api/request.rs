//
//  bitbucket-cloud-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Transport-agnostic request descriptions.
//!
//! A [`RequestDescriptor`] is plain data: building one never touches the
//! network. [`BitbucketClient`](crate::api::BitbucketClient) builds them from
//! an [`Endpoint`](crate::api::Endpoint) and hands them to `reqwest` in
//! either execution mode.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::api::common::Field;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query parameters with unset filters already removed.
///
/// Values go in as [`Field`]s; `Absent` and `Null` entries are dropped on
/// insertion, so whatever remains is exactly what the caller supplied.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::common::Field;
/// use bitbucket_cloud_client::api::QueryParams;
///
/// let query = QueryParams::new()
///     .with("q", &Field::Present("state=\"open\""))
///     .with("sort", &Field::<String>::Absent)
///     .with("page", &Field::<i64>::Null);
///
/// assert_eq!(query.len(), 1);
/// assert_eq!(query.get("q"), Some("state=\"open\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` if `value` is present, stringified with `Display`.
    pub fn push<V: fmt::Display>(&mut self, key: &str, value: &Field<V>) {
        if let Field::Present(value) = value {
            self.0.push((key.to_string(), value.to_string()));
        }
    }

    /// Chaining form of [`push`](Self::push).
    pub fn with<V: fmt::Display>(mut self, key: &str, value: &Field<V>) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    /// The parameters as a key/value mapping.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything needed to perform one HTTP call.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `method` | HTTP method |
/// | `url` | Base URL plus the interpolated path, without query string |
/// | `headers` | Client default headers, plus `Authorization`/`Content-Type` when needed |
/// | `cookies` | Client default cookies, sent as one `Cookie` header |
/// | `timeout` | Bound on the whole call |
/// | `query` | Supplied query parameters only |
/// | `body` | JSON payload, if the endpoint has one |
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub cookies: BTreeMap<String, String>,
    pub timeout: Option<Duration>,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// The `Cookie` header value for the default cookies, if any are set.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }

        Some(
            self.cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::IssueState;

    #[test]
    fn test_query_drops_absent_and_null() {
        let mut query = QueryParams::new();
        query.push("q", &Field::<String>::Absent);
        query.push("sort", &Field::<String>::Null);
        assert!(query.is_empty());

        query.push("pagelen", &Field::Present(0));
        assert_eq!(query.get("pagelen"), Some("0"));
    }

    #[test]
    fn test_enum_values_use_their_literal() {
        let query = QueryParams::new().with("state", &Field::Present(IssueState::OnHold));
        assert_eq!(
            query.to_map(),
            BTreeMap::from([("state".to_string(), "on hold".to_string())])
        );
    }

    #[test]
    fn test_cookie_header() {
        let mut request = RequestDescriptor {
            method: HttpMethod::Get,
            url: "https://api.bitbucket.org/2.0/user".to_string(),
            headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            timeout: None,
            query: QueryParams::new(),
            body: None,
        };
        assert_eq!(request.cookie_header(), None);

        request.cookies.insert("b".to_string(), "2".to_string());
        request.cookies.insert("a".to_string(), "1".to_string());
        assert_eq!(request.cookie_header().as_deref(), Some("a=1; b=2"));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }
}
