//
//  bitbucket-cloud-client
//  api/models/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The error envelope Bitbucket Cloud returns with 4xx/5xx responses.
//!
//! The response mapper never decodes these on its own; callers branch on the
//! status code and opt in through
//! [`ApiResponse::error_body`](crate::api::response::ApiResponse::error_body).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::impl_model;
use crate::api::common::{AdditionalProperties, Field};

/// Details of an API error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    pub message: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub detail: Field<String>,

    /// Free-form data with extra context; its shape depends on the error.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub data: Field<Value>,
}

/// Top-level error response, e.g.
/// `{"type": "error", "error": {"message": "Repository not found"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub error: Field<ErrorDetail>,
}

impl ErrorBody {
    /// The human-readable message, if the body carried one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_option().map(|detail| detail.message.as_str())
    }
}

impl_model!(ErrorDetail, ErrorBody);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Model;
    use serde_json::json;

    #[test]
    fn test_error_body_message() {
        let body = ErrorBody::from_value(json!({
            "type": "error",
            "error": {
                "message": "Bad request",
                "fields": {"src": ["This field is required."]}
            }
        }))
        .unwrap();

        assert_eq!(body.message(), Some("Bad request"));
        let detail = body.error.as_option().unwrap();
        assert!(detail.detail.is_absent());
        assert!(detail.additional_properties().contains("fields"));
    }

    #[test]
    fn test_data_keeps_arbitrary_json() {
        let payload = json!({
            "type": "error",
            "error": {"message": "Conflict", "data": {"key": ["A", 1, null]}}
        });
        let body = ErrorBody::from_value(payload.clone()).unwrap();
        assert_eq!(body.to_value().unwrap(), payload);
    }
}
