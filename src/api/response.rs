//
//  bitbucket-cloud-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Mapping raw HTTP responses onto typed results.
//!
//! # Status Handling
//!
//! | Status | Result |
//! |--------|--------|
//! | In the endpoint's success set | Body decoded into `parsed` |
//! | Anything else | `parsed: None`, status and body kept |
//! | Undocumented, with `raise_on_unexpected_status` | [`ApiError::UnexpectedStatus`] |
//!
//! A malformed body on a success status is an [`ApiError::Decode`]. Error
//! bodies are never decoded automatically; see [`ApiResponse::error_body`].

use tracing::debug;

use super::common::ApiError;
use super::endpoint::Endpoint;
use super::models::{ErrorBody, Model};

/// A completed transport response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// The outcome of one call.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `status` | HTTP status code |
/// | `headers` | Response headers in the order received |
/// | `content` | Raw body bytes |
/// | `parsed` | Decoded model, only for a success status |
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::ApiResponse;
///
/// let response: ApiResponse<()> = ApiResponse {
///     status: 404,
///     headers: Vec::new(),
///     content: br#"{"type": "error", "error": {"message": "Not found"}}"#.to_vec(),
///     parsed: None,
/// };
///
/// assert!(!response.is_success());
/// assert_eq!(response.error_body().unwrap().message(), Some("Not found"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub content: Vec<u8>,
    pub parsed: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the status was one the endpoint decodes.
    pub fn is_success(&self) -> bool {
        self.parsed.is_some()
    }

    /// Consumes the response, returning the parsed model if there is one.
    pub fn into_parsed(self) -> Option<T> {
        self.parsed
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// First header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Best-effort decode of the body as a Bitbucket error envelope.
    pub fn error_body(&self) -> Option<ErrorBody> {
        ErrorBody::from_slice(&self.content).ok()
    }
}

/// Interprets a raw response for endpoint `E`.
///
/// # Errors
///
/// - [`ApiError::Decode`] when a success status carries a body `E` cannot decode
/// - [`ApiError::UnexpectedStatus`] when `raise_on_unexpected_status` is set
///   and the status is in neither `E::SUCCESS` nor `E::DOCUMENTED`
pub fn map_response<E: Endpoint>(
    raw: RawResponse,
    raise_on_unexpected_status: bool,
) -> Result<ApiResponse<E::Output>, ApiError> {
    let RawResponse {
        status,
        headers,
        body,
    } = raw;

    if E::SUCCESS.contains(&status) {
        let parsed =
            E::decode(&body).map_err(|source| ApiError::Decode { status, source })?;
        return Ok(ApiResponse {
            status,
            headers,
            content: body,
            parsed: Some(parsed),
        });
    }

    if raise_on_unexpected_status && !E::DOCUMENTED.contains(&status) {
        return Err(ApiError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    debug!("HTTP {} left unparsed", status);

    Ok(ApiResponse {
        status,
        headers,
        content: body,
        parsed: None,
    })
}

/// Turns an error response into a user-facing message.
///
/// Bitbucket Cloud returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// Falls back to `error.detail`, then a top-level `message`, then the raw
/// body.
pub fn format_api_error(status: u16, body: &str) -> anyhow::Error {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        // {"type": "error", "error": {"message": "..."}}
        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return anyhow::anyhow!("{}", message);
        }

        // {"error": {"detail": "..."}}
        if let Some(detail) = json
            .get("error")
            .and_then(|e| e.get("detail"))
            .and_then(|m| m.as_str())
        {
            return anyhow::anyhow!("{}", detail);
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return anyhow::anyhow!("{}", message);
        }
    }

    anyhow::anyhow!("API error ({}): {}", status, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Project;
    use crate::api::request::HttpMethod;

    struct GetThing;

    impl Endpoint for GetThing {
        type Output = Project;
        const METHOD: HttpMethod = HttpMethod::Get;
        const DOCUMENTED: &'static [u16] = &[404];

        fn path(&self) -> String {
            "/thing".to_string()
        }
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_success_status_is_parsed() {
        let response =
            map_response::<GetThing>(raw(200, r#"{"type": "project", "key": "LEAR"}"#), false)
                .unwrap();
        assert!(response.is_success());
        assert_eq!(response.header("content-type"), Some("application/json"));
        let project = response.into_parsed().unwrap();
        assert_eq!(project.key.as_option().map(String::as_str), Some("LEAR"));
    }

    #[test]
    fn test_not_found_is_unparsed_and_keeps_body() {
        let body = r#"{"type": "error", "error": {"message": "No such project"}}"#;
        let response = map_response::<GetThing>(raw(404, body), false).unwrap();

        assert_eq!(response.status, 404);
        assert!(response.parsed.is_none());
        assert_eq!(response.text(), body);
        assert_eq!(response.error_body().unwrap().message(), Some("No such project"));
    }

    #[test]
    fn test_non_json_error_body_is_still_unparsed() {
        let response = map_response::<GetThing>(raw(502, "<html>Bad Gateway</html>"), false).unwrap();
        assert!(response.parsed.is_none());
        assert!(response.error_body().is_none());
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = map_response::<GetThing>(raw(200, "{not json"), false).unwrap_err();
        assert!(matches!(err, ApiError::Decode { status: 200, .. }));
    }

    #[test]
    fn test_raise_only_on_undocumented_status() {
        let documented = map_response::<GetThing>(raw(404, "{}"), true).unwrap();
        assert!(documented.parsed.is_none());

        let err = map_response::<GetThing>(raw(500, "boom"), true).unwrap_err();
        match err {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_api_error_cloud_format() {
        let body = r#"{"type": "error", "error": {"message": "Repository not found"}}"#;
        assert_eq!(format_api_error(404, body).to_string(), "Repository not found");
    }

    #[test]
    fn test_format_api_error_detail_and_fallback() {
        let body = r#"{"error": {"detail": "Token expired"}}"#;
        assert_eq!(format_api_error(401, body).to_string(), "Token expired");
        assert_eq!(
            format_api_error(500, "Internal Server Error").to_string(),
            "API error (500): Internal Server Error"
        );
    }
}
